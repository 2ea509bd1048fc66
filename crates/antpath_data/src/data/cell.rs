use serde::{Deserialize, Serialize};

/// Terrain classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    /// Open ground agents may walk across.
    #[default]
    Passable,
    /// Obstacle reported by a boundary reading.
    Wall,
    /// Goal reported by an end reading.
    Destination,
}
