//! # Antpath IO
//!
//! File-facing layer for the antpath simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - Scan log loading and field construction from files
//! - A JSON cache of reconstructed fields
//! - Snapshot persistence and route export

/// Field cache keyed on the scan log's modification time
pub mod cache;
/// Error types and result aliases for I/O operations
pub mod error;
/// Scan log decoding and field loading
pub mod loader;
/// Shortest-route export in sensor units
pub mod route;
/// Validated JSON helpers
pub mod serialization;

pub use cache::load_field_cached;
pub use error::{IoError, Result};
pub use loader::{load_field, read_scan_log, ScanLog};
pub use route::{simplify_route, write_route_csv};
pub use serialization::{read_json_file, write_json_file, write_snapshots};
