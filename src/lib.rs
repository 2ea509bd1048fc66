//! # antpath
//!
//! Rebuilds an occupancy grid from polar sensor scans and lets a colony of
//! pheromone-following agents search it for the shortest route from the
//! scan start to a destination.

pub mod app;

pub use antpath_core::config::SimConfig;
pub use app::{RunSummary, Simulation};
