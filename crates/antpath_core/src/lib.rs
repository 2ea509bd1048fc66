//! # Antpath Core
//!
//! The environment model behind the antpath simulation.
//!
//! This crate contains:
//! - Sensor scan decoding (tokenizer, polar readings)
//! - Field reconstruction from scans (bounding box, binning, classification)
//! - Grid cells with saturating pheromone levels
//! - The per-cycle update (agent pass, then decay)
//! - A reference pheromone-following agent
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use antpath_core::field::Field;
//! use antpath_core::scan::Scan;
//! use antpath_core::walker::{PheromoneWalker, WalkerConfig};
//!
//! let scan = Scan::parse("5,5,0,5,end,1.5708,5,boundary", ",", 1)
//!     .unwrap()
//!     .unwrap();
//! let mut field = Field::from_scans(10, 10, &[scan]).unwrap();
//!
//! let mut agents = vec![PheromoneWalker::new(field.start_point(), WalkerConfig::default(), 7)];
//! field.advance_cycle(&mut agents);
//! assert_eq!(field.cycle(), 1);
//! ```

/// Grid cells, pheromone baselines and saturation rules
pub mod cell;
/// Configuration management for simulation parameters
pub mod config;
/// Agent trait and the per-cycle update
pub mod cycle;
/// Error types for field construction
pub mod error;
/// The reconstructed environment grid
pub mod field;
/// Performance metrics collection and logging
pub mod metrics;
/// Scan-line tokenizer and polar sensor readings
pub mod scan;
/// Reference pheromone-following agent
pub mod walker;

pub use antpath_data::{CellKind, FieldCoordinate, SensorTag};
pub use cell::{baseline_for, CellLogic, GridCell, MAX_PHEROMONE, PASSABLE_FLOOR};
pub use cycle::{Agent, CycleWrites, PheromoneDeposit};
pub use error::FieldError;
pub use field::Field;
pub use metrics::{init_logging, Metrics};
