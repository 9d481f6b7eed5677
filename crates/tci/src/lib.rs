//! Domain crate for the Temperament and Character Inventory (TCI) service.
//!
//! The interesting logic lives in [`inventory`]: the 140-item instrument
//! catalog, the pure scoring engine, and the result persistence boundary.
//! Configuration, telemetry, and the shared error type follow alongside so
//! the API service stays thin.

pub mod config;
pub mod error;
pub mod inventory;
pub mod telemetry;
