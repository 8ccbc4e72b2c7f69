use serde::{Deserialize, Serialize};

use crate::error::UnitError;

/// Cash a new renter starts with, enough to cover a share of a typical unit.
pub const DEFAULT_CASH: f64 = 5000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RenterRecord")]
pub struct Renter {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub occupation: String,
    pub cash: f64,
    pub is_evicted: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RenterRecord {
    name: String,
    age: StoredAge,
    gender: String,
    occupation: String,
    cash: f64,
    #[serde(default)]
    is_evicted: bool,
}

/// Older unit documents keep the age as a string such as `"30"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAge {
    Number(u32),
    Text(String),
}

impl StoredAge {
    fn into_age(self) -> Result<u32, UnitError> {
        match self {
            StoredAge::Number(age) => Ok(age),
            StoredAge::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| UnitError::validation(format!("'{text}' is not an age"))),
        }
    }
}

impl TryFrom<RenterRecord> for Renter {
    type Error = UnitError;

    fn try_from(record: RenterRecord) -> Result<Self, Self::Error> {
        let age = record.age.into_age()?;
        let renter = Renter::new(record.name, age, record.gender, record.occupation)?
            .with_cash(record.cash)?;

        Ok(Renter {
            is_evicted: record.is_evicted,
            ..renter
        })
    }
}

impl Renter {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        occupation: impl Into<String>,
    ) -> Result<Renter, UnitError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UnitError::validation("renter name must not be empty"));
        }

        Ok(Renter {
            name,
            age,
            gender: gender.into(),
            occupation: occupation.into(),
            cash: DEFAULT_CASH,
            is_evicted: false,
        })
    }

    pub fn with_cash(mut self, cash: f64) -> Result<Renter, UnitError> {
        if !cash.is_finite() || cash < 0.0 {
            return Err(UnitError::validation(format!(
                "cash of {} must be a non-negative number, got {cash}",
                self.name
            )));
        }
        self.cash = cash;
        Ok(self)
    }
}

#[cfg(test)]
mod renter_tests {
    use super::*;

    #[test]
    fn new_renter_defaults() {
        let renter = Renter::new("laura", 30, "female", "spartan").unwrap();
        assert_eq!(renter.cash, DEFAULT_CASH);
        assert!(!renter.is_evicted);
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            Renter::new("  ", 30, "female", "spartan"),
            Err(UnitError::Validation(_))
        ));
    }

    #[test]
    fn rejects_negative_cash() {
        let renter = Renter::new("jack", 53, "male", "coder").unwrap();
        assert!(renter.with_cash(-1.0).is_err());
    }

    #[test]
    fn document_uses_is_evicted_key() {
        let mut renter = Renter::new("jack", 53, "male", "coder").unwrap();
        renter.is_evicted = true;
        let value = serde_json::to_value(&renter).unwrap();
        assert_eq!(value["isEvicted"], true);

        let back: Renter = serde_json::from_value(value).unwrap();
        assert_eq!(back, renter);
    }

    #[test]
    fn deserialize_accepts_age_as_string() {
        let raw = r#"{"name":"laura","age":"30","gender":"female","occupation":"spartan","cash":2000,"isEvicted":false}"#;
        let renter: Renter = serde_json::from_str(raw).unwrap();
        assert_eq!(renter.age, 30);
        assert_eq!(renter.cash, 2000.0);

        let serialized = serde_json::to_value(&renter).unwrap();
        assert_eq!(serialized["age"], 30);
    }

    #[test]
    fn deserialize_rejects_non_numeric_age() {
        let raw = r#"{"name":"laura","age":"thirty","gender":"female","occupation":"spartan","cash":2000}"#;
        assert!(serde_json::from_str::<Renter>(raw).is_err());
    }

    #[test]
    fn deserialize_rejects_empty_name() {
        let raw = r#"{"name":"","age":20,"gender":"male","occupation":"waiter","cash":10}"#;
        assert!(serde_json::from_str::<Renter>(raw).is_err());
    }
}
