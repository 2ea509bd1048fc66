pub mod build;
pub mod render;

use crate::cell::GridCell;
use crate::error::FieldError;
use antpath_data::{CellKind, FieldCoordinate};
use serde::{Deserialize, Serialize};

/// Pheromone removed from each eligible cell per cycle unless configured.
pub const DEFAULT_DECAY_STEP: u32 = 1;

/// The reconstructed environment: a `width * height` grid of cells stored
/// row-major (`x + y * width`), plus the start point agents spawn at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    width: usize,
    height: usize,
    start_point: FieldCoordinate,
    cells: Vec<GridCell>,
    /// Sensor units covered by one cell along x and y.
    cell_size: (f64, f64),
    /// Scan origins, scaled to grid coordinates, in file order.
    original_route: Vec<FieldCoordinate>,
    shortest_route: Vec<FieldCoordinate>,
    decay_step: u32,
    cycle: u64,
}

impl Field {
    /// A blank passable grid with the start point at the origin.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| GridCell::new(FieldCoordinate::new(x as i32, y as i32)))
            })
            .collect();
        Ok(Self {
            width,
            height,
            start_point: FieldCoordinate::default(),
            cells,
            cell_size: (1.0, 1.0),
            original_route: Vec::new(),
            shortest_route: Vec::new(),
            decay_step: DEFAULT_DECAY_STEP,
            cycle: 0,
        })
    }

    #[must_use]
    pub fn with_decay_step(mut self, decay_step: u32) -> Self {
        self.decay_step = decay_step;
        self
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn start_point(&self) -> FieldCoordinate {
        self.start_point
    }

    pub fn set_start_point(&mut self, start: FieldCoordinate) -> Result<(), FieldError> {
        self.index(start.x, start.y)
            .ok_or(FieldError::IndexOutOfRange {
                x: i64::from(start.x),
                y: i64::from(start.y),
                width: self.width,
                height: self.height,
            })?;
        self.start_point = start;
        Ok(())
    }

    #[must_use]
    pub fn cell_size(&self) -> (f64, f64) {
        self.cell_size
    }

    #[must_use]
    pub fn decay_step(&self) -> u32 {
        self.decay_step
    }

    /// Number of completed cycles.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[must_use]
    pub fn original_route(&self) -> &[FieldCoordinate] {
        &self.original_route
    }

    /// Shortest route any agent has reported, empty until one succeeds.
    #[must_use]
    pub fn shortest_route(&self) -> &[FieldCoordinate] {
        &self.shortest_route
    }

    /// Flat index of `(x, y)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then_some(x + y * self.width)
    }

    #[must_use]
    pub fn contains(&self, at: FieldCoordinate) -> bool {
        self.index(at.x, at.y).is_some()
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<&GridCell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    #[must_use]
    pub fn cell_at(&self, at: FieldCoordinate) -> Option<&GridCell> {
        self.cell(at.x, at.y)
    }

    /// Whether `at` lies on the outermost ring of the grid.
    #[must_use]
    pub fn is_edge(&self, at: FieldCoordinate) -> bool {
        self.contains(at)
            && (at.x == 0
                || at.y == 0
                || at.x as usize == self.width - 1
                || at.y as usize == self.height - 1)
    }

    /// Raises (or, for negative amounts, lowers) the pheromone at `(x, y)`,
    /// clamped to the cell's valid range. Returns `false` outside the grid.
    pub fn reinforce(&mut self, x: i32, y: i32, amount: i64) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx].reinforce(amount);
                true
            }
            None => false,
        }
    }

    /// Reclassifies one cell, resetting its pheromone to the kind's baseline.
    pub fn set_kind(&mut self, x: i32, y: i32, kind: CellKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx].set_kind(kind);
                true
            }
            None => false,
        }
    }

    /// Keeps `route` if it beats the current shortest route.
    /// Returns `true` when it was kept.
    pub fn record_route(&mut self, route: &[FieldCoordinate]) -> bool {
        if route.is_empty() {
            return false;
        }
        if self.shortest_route.is_empty() || route.len() < self.shortest_route.len() {
            tracing::info!(length = route.len(), cycle = self.cycle, "New shortest route");
            self.shortest_route = route.to_vec();
            return true;
        }
        false
    }

    /// Checks the shape invariants a field built through [`Field::new`]
    /// always holds. Fields read back from disk must pass this before use.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width.checked_mul(self.height).ok_or(
            FieldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            },
        )?;
        if self.cells.len() != expected {
            return Err(FieldError::Inconsistent(format!(
                "{} cells for a {}x{} grid",
                self.cells.len(),
                self.width,
                self.height
            )));
        }
        if let Some((idx, cell)) = self
            .cells
            .iter()
            .enumerate()
            .find(|(idx, cell)| self.index(cell.position().x, cell.position().y) != Some(*idx))
        {
            return Err(FieldError::Inconsistent(format!(
                "cell {idx} claims position {}",
                cell.position()
            )));
        }
        if !self.contains(self.start_point) {
            return Err(FieldError::Inconsistent(format!(
                "start point {} outside the grid",
                self.start_point
            )));
        }
        Ok(())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [GridCell] {
        &mut self.cells
    }

    pub(crate) fn finish_cycle(&mut self) {
        self.cycle += 1;
    }

    /// Number of cells of each kind: `(passable, wall, destination)`.
    #[must_use]
    pub fn census(&self) -> (usize, usize, usize) {
        self.cells
            .iter()
            .fold((0, 0, 0), |(p, w, d), cell| match cell.kind() {
                CellKind::Passable => (p + 1, w, d),
                CellKind::Wall => (p, w + 1, d),
                CellKind::Destination => (p, w, d + 1),
            })
    }
}
