pub mod apartment;
pub mod renter;
pub mod room;
pub mod unit_id;
