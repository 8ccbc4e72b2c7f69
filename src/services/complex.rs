use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::{
    db::UnitStore,
    error::UnitError,
    models::{apartment::Apartment, room::RoomRates, unit_id::UnitId},
};

impl Apartment {
    /// Inserts the unit on first save and updates it afterwards.
    pub async fn save<S>(&mut self, store: &S) -> Result<UnitId, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        let document = self.to_value()?;

        match self.id {
            Some(id) => {
                if !store.update(id, document).await? {
                    return Err(UnitError::not_found(id));
                }
                debug!("Updated unit {} ({}) in {}", id, self.name, store.name());
                Ok(id)
            }
            None => {
                let id = store.insert(document).await?;
                self.id = Some(id);
                info!("Saved unit {} as {} in {}", self.name, id, store.name());
                Ok(id)
            }
        }
    }

    pub async fn find<S>(store: &S) -> Result<Vec<Apartment>, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        store
            .find()
            .await?
            .into_iter()
            .map(|unit| Apartment::from_document(unit.id, unit.document))
            .collect()
    }

    /// Returns the id as a string alongside the unit.
    pub async fn find_by_id<S>(store: &S, id: &str) -> Result<(String, Apartment), UnitError>
    where
        S: UnitStore + ?Sized,
    {
        let unit_id: UnitId = id.parse()?;
        let document = store
            .find_one(unit_id)
            .await?
            .ok_or_else(|| UnitError::not_found(unit_id))?;

        let apartment = Apartment::from_document(unit_id, document)?;
        Ok((unit_id.to_string(), apartment))
    }

    /// Deleting a unit that does not exist is a no-op and returns false.
    pub async fn delete_by_id<S>(store: &S, id: &str) -> Result<bool, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        let id: UnitId = id.parse()?;
        let removed = store.remove(id).await?;
        if removed {
            info!("Deleted unit {} from {}", id, store.name());
        } else {
            debug!("No unit {} in {} to delete", id, store.name());
        }
        Ok(removed)
    }

    pub async fn clear<S>(store: &S) -> Result<usize, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        Ok(store.remove_all().await?)
    }

    pub async fn complex_area<S>(store: &S) -> Result<f64, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        Ok(Apartment::find(store).await?.iter().map(Apartment::area).sum())
    }

    pub async fn complex_cost<S>(store: &S) -> Result<f64, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        Ok(Apartment::find(store).await?.iter().map(Apartment::cost).sum())
    }

    pub async fn complex_tenants<S>(store: &S) -> Result<usize, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        Ok(Apartment::find(store)
            .await?
            .iter()
            .map(|apartment| apartment.renters.len())
            .sum())
    }

    /// Rent due across the complex. Units without rooms contribute nothing.
    pub async fn complex_revenue<S>(store: &S) -> Result<f64, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        Apartment::complex_cost(store).await
    }
}

/// Summary of every persisted unit, built from a single scan of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexReport {
    pub generated_at: DateTime<Utc>,
    pub units: usize,
    pub available_units: usize,
    pub vacancies: usize,
    pub area: f64,
    pub cost: f64,
    pub tenants: usize,
    pub revenue: f64,
}

impl ComplexReport {
    pub async fn collect<S>(store: &S, rates: &RoomRates) -> Result<ComplexReport, UnitError>
    where
        S: UnitStore + ?Sized,
    {
        let apartments = Apartment::find(store).await?;
        Ok(ComplexReport::from_apartments(&apartments, rates))
    }

    pub fn from_apartments(apartments: &[Apartment], rates: &RoomRates) -> ComplexReport {
        let cost: f64 = apartments.iter().map(|a| a.cost_with(rates)).sum();

        ComplexReport {
            generated_at: Utc::now(),
            units: apartments.len(),
            available_units: apartments.iter().filter(|a| a.is_available()).count(),
            vacancies: apartments.iter().map(Apartment::vacancies).sum(),
            area: apartments.iter().map(Apartment::area).sum(),
            cost,
            tenants: apartments.iter().map(|a| a.renters.len()).sum(),
            revenue: cost,
        }
    }
}
