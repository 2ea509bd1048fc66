//! Grid cells and their pheromone rules.
//!
//! A cell's classification and its pheromone level are coupled: every
//! classification change resets the level to [`baseline_for`] that kind.
//! Pheromone is saturating and always stays within `0..=MAX_PHEROMONE`.

use antpath_data::{CellKind, FieldCoordinate, SensorTag};
use serde::{Deserialize, Serialize};

/// Upper bound of a cell's pheromone level; destinations sit here permanently.
pub const MAX_PHEROMONE: u32 = u32::MAX;

/// Baseline of a passable cell. Decay never takes a cell below it.
pub const PASSABLE_FLOOR: u32 = 1;

/// Pheromone level a cell is reset to when it becomes `kind`.
#[must_use]
pub const fn baseline_for(kind: CellKind) -> u32 {
    match kind {
        CellKind::Passable => PASSABLE_FLOOR,
        CellKind::Wall => 0,
        CellKind::Destination => MAX_PHEROMONE,
    }
}

pub trait CellLogic {
    fn symbol(&self) -> char;
    fn is_walkable(&self) -> bool;
}

impl CellLogic for CellKind {
    fn symbol(&self) -> char {
        match self {
            CellKind::Passable => ' ',
            CellKind::Wall => '█',
            CellKind::Destination => '◎',
        }
    }

    fn is_walkable(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

/// Classification a bin receives from the first reading written to it.
#[must_use]
pub fn kind_for_tag(tag: SensorTag) -> CellKind {
    match tag {
        SensorTag::Boundary => CellKind::Wall,
        SensorTag::End => CellKind::Destination,
        SensorTag::None => CellKind::Passable,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    position: FieldCoordinate,
    kind: CellKind,
    pheromone: u32,
}

impl GridCell {
    /// A passable cell at its floor level.
    #[must_use]
    pub fn new(position: FieldCoordinate) -> Self {
        Self::with_kind(position, CellKind::Passable)
    }

    #[must_use]
    pub fn with_kind(position: FieldCoordinate, kind: CellKind) -> Self {
        Self {
            position,
            kind,
            pheromone: baseline_for(kind),
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> FieldCoordinate {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn pheromone(&self) -> u32 {
        self.pheromone
    }

    /// Reclassifies the cell and resets its pheromone to the kind's baseline.
    pub fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
        self.pheromone = baseline_for(kind);
    }

    /// Sets the pheromone level, clamped to `0..=MAX_PHEROMONE`.
    pub fn set_pheromone(&mut self, level: i64) {
        self.pheromone = level.clamp(0, i64::from(MAX_PHEROMONE)) as u32;
    }

    /// Adds `amount` (which may be negative) to the pheromone level.
    ///
    /// Only passable cells take deposits; walls stay at 0 and destinations
    /// at the maximum.
    pub fn reinforce(&mut self, amount: i64) {
        if self.kind != CellKind::Passable {
            return;
        }
        let level = i64::from(self.pheromone).saturating_add(amount);
        self.set_pheromone(level);
    }

    /// One evaporation step. Destinations and cells at or below the floor
    /// are left untouched.
    pub fn decay(&mut self, step: u32) {
        if self.kind == CellKind::Destination || self.pheromone <= PASSABLE_FLOOR {
            return;
        }
        self.pheromone = self.pheromone.saturating_sub(step).max(PASSABLE_FLOOR);
    }

    /// Merges a later reading into an already classified bin.
    ///
    /// An end reading always wins. A boundary reading only turns a passable
    /// cell into a wall and never masks a destination.
    pub fn absorb(&mut self, tag: SensorTag) {
        match tag {
            SensorTag::End => self.set_kind(CellKind::Destination),
            SensorTag::Boundary if self.kind == CellKind::Passable => {
                self.set_kind(CellKind::Wall);
            }
            _ => {}
        }
    }
}
