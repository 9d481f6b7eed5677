//! The TCI instrument: item catalog, dimension model, scoring, and results.

pub mod catalog;
pub mod dimensions;
pub mod results;
pub mod scoring;

pub use catalog::{Direction, Item, ItemCatalog, ItemClassification};
pub use dimensions::{Dimension, Subdimension};
pub use scoring::{
    CalculatedResult, ResponseMap, ScoringEngine, ScoringError, ValidityDetail, ValidityReport,
};
