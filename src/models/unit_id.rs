use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnitError;

/// Identifier the unit store assigns on first insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(i32);

impl UnitId {
    pub fn new(id: i32) -> Self {
        UnitId(id)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UnitId {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(UnitId)
            .map_err(|_| UnitError::validation(format!("'{s}' is not a unit id")))
    }
}

impl From<i32> for UnitId {
    fn from(id: i32) -> Self {
        UnitId(id)
    }
}
