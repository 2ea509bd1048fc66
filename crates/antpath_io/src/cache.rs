//! On-disk cache of reconstructed fields.
//!
//! The field is stored as JSON together with the delimiters it was parsed
//! with. It is reused while the cache is newer than the scan log, was built
//! for the same grid size and delimiters, and still passes
//! [`Field::validate`].

use crate::error::Result;
use crate::loader::load_field;
use crate::serialization::{read_json_file, write_json_file};
use antpath_core::field::Field;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;

#[derive(Serialize)]
struct CacheEntryRef<'a> {
    delimiters: &'a str,
    field: &'a Field,
}

#[derive(Deserialize)]
struct CacheEntry {
    delimiters: String,
    field: Field,
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Whether the cache at `cache` may stand in for the scan log at `data`.
#[must_use]
pub fn is_fresh(data: &Path, cache: &Path) -> bool {
    match (modified(data), modified(cache)) {
        (Some(data_time), Some(cache_time)) => cache_time > data_time,
        _ => false,
    }
}

/// Loads the field for `data`, going through the cache at `cache`.
///
/// A stale, unreadable or mismatched cache is rebuilt. Failing to write the
/// new cache is logged and otherwise ignored.
pub fn load_field_cached(
    data: &Path,
    cache: &Path,
    width: usize,
    height: usize,
    delimiters: &str,
) -> Result<Field> {
    if is_fresh(data, cache) {
        match read_json_file::<CacheEntry, _>(cache) {
            Ok(entry) => match reusable(entry, width, height, delimiters) {
                Ok(field) => {
                    tracing::info!(cache = %cache.display(), "Using cached field");
                    return Ok(field);
                }
                Err(reason) => {
                    tracing::info!(reason = %reason, "Field cache does not match, rebuilding");
                }
            },
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable field cache"),
        }
    }

    let field = load_field(data, width, height, delimiters)?;
    let entry = CacheEntryRef {
        delimiters,
        field: &field,
    };
    if let Err(e) = write_json_file(&entry, cache) {
        tracing::warn!(error = %e, cache = %cache.display(), "Could not write field cache");
    }
    Ok(field)
}

fn reusable(
    entry: CacheEntry,
    width: usize,
    height: usize,
    delimiters: &str,
) -> std::result::Result<Field, String> {
    if entry.field.width() != width || entry.field.height() != height {
        return Err(format!(
            "built for {}x{}",
            entry.field.width(),
            entry.field.height()
        ));
    }
    if entry.delimiters != delimiters {
        return Err(format!("parsed with delimiters {:?}", entry.delimiters));
    }
    entry.field.validate().map_err(|e| e.to_string())?;
    Ok(entry.field)
}
