use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{
    renter::Renter,
    room::{Room, RoomRates},
    unit_id::UnitId,
};
use crate::error::UnitError;

/// Shape of a unit as it is kept in the store. The identifier lives next to
/// the document, never inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitDocument {
    pub name: String,
    pub rooms: Vec<Room>,
    pub renters: Vec<Renter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    pub id: Option<UnitId>,
    pub name: String,
    pub rooms: Vec<Room>,
    pub renters: Vec<Renter>,
}

/// Outcome of one round of rent collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentCollection {
    pub share: f64,
    pub collected: f64,
    pub evicted: Vec<Renter>,
}

impl Apartment {
    pub fn new(name: impl Into<String>) -> Self {
        Apartment {
            id: None,
            name: name.into(),
            rooms: Vec::new(),
            renters: Vec::new(),
        }
    }

    pub fn area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }

    /// Total rent due for the unit.
    pub fn cost(&self) -> f64 {
        self.rooms.iter().map(Room::cost).sum()
    }

    pub fn cost_with(&self, rates: &RoomRates) -> f64 {
        self.rooms.iter().map(|room| room.cost_with(rates)).sum()
    }

    pub fn bedrooms(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_bedroom()).count()
    }

    /// A unit takes one renter per bedroom.
    pub fn is_available(&self) -> bool {
        self.renters.len() < self.bedrooms()
    }

    pub fn vacancies(&self) -> usize {
        self.bedrooms().saturating_sub(self.renters.len())
    }

    /// Removes every evicted renter, keeping the order of the rest, and
    /// returns the removed ones.
    pub fn purge_evicted(&mut self) -> Vec<Renter> {
        let (evicted, staying): (Vec<Renter>, Vec<Renter>) = self
            .renters
            .drain(..)
            .partition(|renter| renter.is_evicted);
        self.renters = staying;

        for renter in &evicted {
            debug!("Purged evicted renter {} from {}", renter.name, self.name);
        }

        evicted
    }

    /// Splits the unit's cost evenly over the renters not already flagged for
    /// eviction. A renter who cannot pay the full share pays nothing and is
    /// evicted. Flagged renters are purged without being charged.
    pub fn collect_rent(&mut self) -> RentCollection {
        let payers = self.renters.iter().filter(|r| !r.is_evicted).count();
        if payers == 0 {
            return RentCollection {
                evicted: self.purge_evicted(),
                ..RentCollection::default()
            };
        }

        let share = self.cost() / payers as f64;
        let mut collected = 0.0;

        for renter in self.renters.iter_mut().filter(|r| !r.is_evicted) {
            if renter.cash >= share {
                renter.cash -= share;
                collected += share;
            } else {
                renter.is_evicted = true;
            }
        }

        let evicted = self.purge_evicted();
        info!(
            "Collected {:.2} rent from {} ({:.2} each), evicted {} renter(s)",
            collected,
            self.name,
            share,
            evicted.len()
        );

        RentCollection {
            share,
            collected,
            evicted,
        }
    }

    pub fn to_document(&self) -> UnitDocument {
        UnitDocument {
            name: self.name.clone(),
            rooms: self.rooms.clone(),
            renters: self.renters.clone(),
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, UnitError> {
        serde_json::to_value(self.to_document()).map_err(|source| UnitError::MalformedDocument {
            id: self.label(),
            source,
        })
    }

    /// Rebuilds an apartment from a stored document, rejecting anything that
    /// does not have the unit shape.
    pub fn from_document(id: UnitId, document: serde_json::Value) -> Result<Apartment, UnitError> {
        let UnitDocument {
            name,
            rooms,
            renters,
        } = serde_json::from_value::<UnitDocument>(document).map_err(|source| {
            UnitError::MalformedDocument {
                id: id.to_string(),
                source,
            }
        })?;

        Ok(Apartment {
            id: Some(id),
            name,
            rooms,
            renters,
        })
    }

    fn label(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod apartment_tests {
    use serde_json::json;

    use super::*;
    use crate::models::room::RoomKind;

    fn rooms() -> Vec<Room> {
        vec![
            Room::new(RoomKind::Bedroom, 30.0, 20.0).unwrap(),
            Room::new(RoomKind::Kitchen, 20.0, 20.0).unwrap(),
            Room::new(RoomKind::Bedroom, 10.0, 20.0).unwrap(),
            Room::new(RoomKind::Bathroom, 10.0, 10.0).unwrap(),
        ]
    }

    #[test]
    fn empty_apartment_is_all_zero() {
        let apt = Apartment::new("A1");
        assert_eq!(apt.area(), 0.0);
        assert_eq!(apt.cost(), 0.0);
        assert_eq!(apt.bedrooms(), 0);
        assert!(!apt.is_available());
    }

    #[test]
    fn vacancies_saturate() {
        let mut apt = Apartment::new("A1");
        apt.rooms = rooms();
        assert_eq!(apt.vacancies(), 2);

        for name in ["a", "b", "c"] {
            apt.renters.push(Renter::new(name, 20, "male", "coder").unwrap());
        }
        assert_eq!(apt.vacancies(), 0);
    }

    #[test]
    fn cost_with_rate_table() {
        let mut apt = Apartment::new("A1");
        apt.rooms = rooms();
        let rates = RoomRates {
            bedroom: 10.0,
            ..RoomRates::default()
        };
        // bedrooms 800 * 10 + kitchen 400 * 5 + bathroom 100 * 5
        assert_eq!(apt.cost_with(&rates), 10500.0);
        assert_eq!(apt.cost_with(&RoomRates::default()), apt.cost());
    }

    #[test]
    fn flagged_renter_does_not_reduce_collection() {
        let mut apt = Apartment::new("A1");
        apt.rooms = vec![
            Room::new(RoomKind::Bedroom, 10.0, 10.0).unwrap(),
            Room::new(RoomKind::Bedroom, 10.0, 10.0).unwrap(),
        ];
        let mut flagged = Renter::new("a", 30, "female", "spartan")
            .unwrap()
            .with_cash(2000.0)
            .unwrap();
        flagged.is_evicted = true;
        apt.renters = vec![
            flagged,
            Renter::new("b", 53, "male", "coder")
                .unwrap()
                .with_cash(2000.0)
                .unwrap(),
        ];

        let collection = apt.collect_rent();

        assert_eq!(collection.share, 1000.0);
        assert_eq!(collection.collected, apt.cost());
        assert_eq!(collection.evicted.len(), 1);
        assert_eq!(collection.evicted[0].cash, 2000.0);
        assert_eq!(apt.renters.len(), 1);
        assert_eq!(apt.renters[0].cash, 1000.0);
    }

    #[test]
    fn only_flagged_renters_are_purged_without_charge() {
        let mut apt = Apartment::new("A1");
        apt.rooms = rooms();
        let mut flagged = Renter::new("laura", 30, "female", "spartan").unwrap();
        flagged.is_evicted = true;
        apt.renters = vec![flagged];

        let collection = apt.collect_rent();

        assert_eq!(collection.collected, 0.0);
        assert_eq!(collection.evicted.len(), 1);
        assert_eq!(collection.evicted[0].cash, 5000.0);
        assert!(apt.renters.is_empty());
    }

    #[test]
    fn document_round_trip() {
        let mut apt = Apartment::new("A1");
        apt.rooms = rooms();
        apt.renters = vec![Renter::new("laura", 30, "female", "spartan").unwrap()];

        let value = apt.to_value().unwrap();
        assert_eq!(value["renters"][0]["isEvicted"], false);

        let back = Apartment::from_document(UnitId::new(7), value).unwrap();
        assert_eq!(back.id, Some(UnitId::new(7)));
        assert_eq!(back.to_document(), apt.to_document());
    }

    #[test]
    fn from_document_reads_string_age() {
        let document = json!({
            "name": "A1",
            "rooms": [{ "kind": "bedroom", "width": 10, "length": 10 }],
            "renters": [{
                "name": "laura",
                "age": "30",
                "gender": "female",
                "occupation": "spartan",
                "cash": 2000,
                "isEvicted": false
            }]
        });

        let apt = Apartment::from_document(UnitId::new(1), document).unwrap();

        assert_eq!(apt.renters[0].age, 30);
        assert!(!apt.is_available());
    }

    #[test]
    fn from_document_rejects_unknown_fields() {
        let document = json!({ "name": "A1", "rooms": [], "renters": [], "floor": 3 });
        assert!(matches!(
            Apartment::from_document(UnitId::new(1), document),
            Err(UnitError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn from_document_rejects_missing_fields() {
        let document = json!({ "name": "A1" });
        assert!(Apartment::from_document(UnitId::new(1), document).is_err());
    }
}
