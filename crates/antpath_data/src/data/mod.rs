//! Core data structures for the antpath simulation.

pub mod cell;
pub mod coordinate;
pub mod sensor;
pub mod snapshot;
