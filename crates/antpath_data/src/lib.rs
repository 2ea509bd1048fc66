//! Plain data types shared by the antpath crates.

pub mod data;

pub use data::cell::CellKind;
pub use data::coordinate::FieldCoordinate;
pub use data::sensor::SensorTag;
pub use data::snapshot::{Snapshot, SnapshotCollection};
