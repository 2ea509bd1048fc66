//! Reconstruction of a [`Field`] from sensor scans.
//!
//! Every classified reading is projected into sensor space, the bounding
//! box of all readings fixes the size of one cell, and each reading is then
//! binned into the cell it falls in.

use super::Field;
use crate::cell::kind_for_tag;
use crate::error::FieldError;
use crate::scan::{Scan, SensorReading};
use antpath_data::FieldCoordinate;

/// Outcome counters of a reconstruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub readings: usize,
    pub binned: usize,
    pub out_of_range: usize,
}

/// Maps sensor-space points to grid coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridScale {
    cell_x: f64,
    cell_y: f64,
    width: usize,
    height: usize,
}

impl GridScale {
    fn new(max_x: f64, max_y: f64, width: usize, height: usize) -> Self {
        Self {
            cell_x: axis_cell_size(max_x, width),
            cell_y: axis_cell_size(max_y, height),
            width,
            height,
        }
    }

    /// Rounded grid coordinate of a sensor-space point. May lie outside the grid.
    fn scale(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x / self.cell_x).round() as i64,
            (y / self.cell_y).round() as i64,
        )
    }

    /// Grid coordinate of a sensor-space point.
    ///
    /// The farthest reading always scales to exactly `width` (or `height`),
    /// so that far edge folds into the last column or row. Anything beyond
    /// it, or below zero, is out of range.
    fn locate(&self, x: f64, y: f64) -> Result<FieldCoordinate, FieldError> {
        let (gx, gy) = self.scale(x, y);
        let fold = |g: i64, limit: usize| -> Option<i32> {
            let limit = limit as i64;
            match g {
                g if (0..limit).contains(&g) => Some(g as i32),
                g if g == limit => Some((limit - 1) as i32),
                _ => None,
            }
        };
        match (fold(gx, self.width), fold(gy, self.height)) {
            (Some(cx), Some(cy)) => Ok(FieldCoordinate::new(cx, cy)),
            _ => Err(FieldError::IndexOutOfRange {
                x: gx,
                y: gy,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

/// Sensor units per cell along one axis. An axis whose readings never go
/// past zero has no extent to divide, so it falls back to one unit per cell.
fn axis_cell_size(max: f64, cells: usize) -> f64 {
    if max > 0.0 {
        max / cells as f64
    } else {
        1.0
    }
}

impl Field {
    /// Builds a `width * height` field from decoded scans.
    ///
    /// The first scan's origin becomes the start point. Readings that scale
    /// outside the grid are skipped; a scan set without any classified
    /// reading is rejected with [`FieldError::EmptyScan`].
    pub fn from_scans(width: usize, height: usize, scans: &[Scan]) -> Result<Self, FieldError> {
        Self::from_scans_with_report(width, height, scans).map(|(field, _)| field)
    }

    pub fn from_scans_with_report(
        width: usize,
        height: usize,
        scans: &[Scan],
    ) -> Result<(Self, BuildReport), FieldError> {
        let mut field = Field::new(width, height)?;

        let readings: Vec<SensorReading> = scans.iter().flat_map(Scan::classified).collect();
        let Some(first) = scans.first() else {
            return Err(FieldError::EmptyScan);
        };
        if readings.is_empty() {
            return Err(FieldError::EmptyScan);
        }

        let (max_x, max_y) = readings
            .iter()
            .fold((0.0f64, 0.0f64), |(mx, my), r| (mx.max(r.x), my.max(r.y)));
        if max_x <= 0.0 || max_y <= 0.0 {
            tracing::warn!(
                max_x,
                max_y,
                "Scan extent is degenerate along one axis, using unit cells"
            );
        }
        let scale = GridScale::new(max_x, max_y, width, height);
        field.cell_size = (scale.cell_x, scale.cell_y);

        field.start_point = match scale.locate(first.origin.0, first.origin.1) {
            Ok(start) => start,
            Err(e) => {
                let (gx, gy) = scale.scale(first.origin.0, first.origin.1);
                let clamped = FieldCoordinate::new(
                    gx.clamp(0, width as i64 - 1) as i32,
                    gy.clamp(0, height as i64 - 1) as i32,
                );
                tracing::warn!(error = %e, start = %clamped, "Start point clamped into the grid");
                clamped
            }
        };

        field.original_route = scans
            .iter()
            .map(|scan| {
                let (gx, gy) = scale.scale(scan.origin.0, scan.origin.1);
                FieldCoordinate::new(gx as i32, gy as i32)
            })
            .collect();

        let report = field.bin_readings(&scale, &readings);
        let (passable, walls, destinations) = field.census();
        tracing::info!(
            width,
            height,
            scans = scans.len(),
            readings = report.readings,
            binned = report.binned,
            out_of_range = report.out_of_range,
            walls,
            destinations,
            passable,
            start = %field.start_point,
            "Field reconstructed"
        );
        Ok((field, report))
    }

    /// Applies the binning policy. The first reading landing in a bin
    /// classifies it outright; later readings only escalate it.
    fn bin_readings(&mut self, scale: &GridScale, readings: &[SensorReading]) -> BuildReport {
        let mut report = BuildReport {
            readings: readings.len(),
            ..BuildReport::default()
        };
        let mut written = vec![false; self.cells.len()];

        for reading in readings {
            let at = match scale.locate(reading.x, reading.y) {
                Ok(at) => at,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping reading");
                    report.out_of_range += 1;
                    continue;
                }
            };
            let idx = at.x as usize + at.y as usize * self.width;
            let cell = &mut self.cells[idx];
            if written[idx] {
                cell.absorb(reading.tag);
            } else {
                cell.set_kind(kind_for_tag(reading.tag));
                written[idx] = true;
            }
            report.binned += 1;
        }
        report
    }
}
