use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldCoordinate {
    pub x: i32,
    pub y: i32,
}

impl FieldCoordinate {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours: up, down, left, right.
    #[must_use]
    pub fn neighbours(self) -> [FieldCoordinate; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }
}

impl fmt::Display for FieldCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for FieldCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_equality() {
        assert_eq!(FieldCoordinate::new(3, 4), FieldCoordinate::from((3, 4)));
        assert_ne!(FieldCoordinate::new(3, 4), FieldCoordinate::new(4, 3));
    }

    #[test]
    fn test_neighbours_are_orthogonal() {
        let n = FieldCoordinate::new(5, 5).neighbours();
        assert_eq!(n[0], FieldCoordinate::new(5, 4));
        assert_eq!(n[1], FieldCoordinate::new(5, 6));
        assert_eq!(n[2], FieldCoordinate::new(4, 5));
        assert_eq!(n[3], FieldCoordinate::new(6, 5));
    }
}
