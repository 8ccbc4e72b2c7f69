use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UnitError;

/// Rent charged per unit of floor area when no rate table is configured.
pub const DEFAULT_RATE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RoomKind {
    Bedroom,
    Kitchen,
    Bathroom,
    Other,
}

impl From<&str> for RoomKind {
    fn from(kind: &str) -> Self {
        match kind.trim().to_lowercase().as_str() {
            "bedroom" => RoomKind::Bedroom,
            "kitchen" => RoomKind::Kitchen,
            "bathroom" => RoomKind::Bathroom,
            _ => RoomKind::Other,
        }
    }
}

impl From<String> for RoomKind {
    fn from(kind: String) -> Self {
        RoomKind::from(kind.as_str())
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomKind::Bedroom => "bedroom",
            RoomKind::Kitchen => "kitchen",
            RoomKind::Bathroom => "bathroom",
            RoomKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Cost per unit of area, per room kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomRates {
    pub bedroom: f64,
    pub kitchen: f64,
    pub bathroom: f64,
    pub other: f64,
}

impl RoomRates {
    pub const fn uniform(rate: f64) -> Self {
        RoomRates {
            bedroom: rate,
            kitchen: rate,
            bathroom: rate,
            other: rate,
        }
    }

    pub fn rate(&self, kind: RoomKind) -> f64 {
        match kind {
            RoomKind::Bedroom => self.bedroom,
            RoomKind::Kitchen => self.kitchen,
            RoomKind::Bathroom => self.bathroom,
            RoomKind::Other => self.other,
        }
    }
}

impl Default for RoomRates {
    fn default() -> Self {
        RoomRates::uniform(DEFAULT_RATE)
    }
}

/// A single room of a unit. Dimensions are checked once at construction and
/// cannot change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomRecord")]
pub struct Room {
    kind: RoomKind,
    width: f64,
    length: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomRecord {
    kind: RoomKind,
    width: f64,
    length: f64,
}

impl TryFrom<RoomRecord> for Room {
    type Error = UnitError;

    fn try_from(record: RoomRecord) -> Result<Self, Self::Error> {
        Room::new(record.kind, record.width, record.length)
    }
}

impl Room {
    pub fn new(kind: impl Into<RoomKind>, width: f64, length: f64) -> Result<Room, UnitError> {
        let kind = kind.into();
        for (label, value) in [("width", width), ("length", length)] {
            if !value.is_finite() || value < 0.0 {
                return Err(UnitError::validation(format!(
                    "{kind} {label} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(Room {
            kind,
            width,
            length,
        })
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_bedroom(&self) -> bool {
        self.kind == RoomKind::Bedroom
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    pub fn cost(&self) -> f64 {
        self.area() * DEFAULT_RATE
    }

    pub fn cost_with(&self, rates: &RoomRates) -> f64 {
        self.area() * rates.rate(self.kind)
    }
}
