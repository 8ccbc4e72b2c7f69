extern crate diesel;

pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;

pub use error::{StoreError, UnitError};
pub use models::{
    apartment::{Apartment, RentCollection, UnitDocument},
    renter::Renter,
    room::{Room, RoomKind, RoomRates},
    unit_id::UnitId,
};
pub use services::complex::ComplexReport;
