//! Text rendering of a field, one character per cell.

use super::Field;
use crate::cell::{CellLogic, MAX_PHEROMONE};
use antpath_data::{CellKind, FieldCoordinate};
use std::collections::HashSet;

/// Shading for passable cells, from no trail to a saturated one.
const TRAIL_RAMP: [char; 5] = [' ', '·', ':', '+', '#'];

/// Log-scaled trail intensity, matching how quickly deposits pile up.
fn trail_symbol(level: u32) -> char {
    if level <= 1 {
        return TRAIL_RAMP[0];
    }
    let fraction = f64::from(level).ln() / f64::from(MAX_PHEROMONE).ln();
    let steps = (TRAIL_RAMP.len() - 1) as f64;
    let idx = 1 + ((fraction * steps) as usize).min(TRAIL_RAMP.len() - 2);
    TRAIL_RAMP[idx]
}

impl Field {
    /// Renders the grid row by row. The start point is drawn as `S`,
    /// `markers` (typically agent positions) as `a`, and the shortest
    /// route as `*`.
    #[must_use]
    pub fn render_ascii(&self, markers: &[FieldCoordinate]) -> String {
        let route: HashSet<FieldCoordinate> = self.shortest_route.iter().copied().collect();
        let markers: HashSet<FieldCoordinate> = markers.iter().copied().collect();
        let mut out = String::with_capacity((self.width * 3 + 1) * self.height);

        for row in self.cells.chunks(self.width) {
            for cell in row {
                let at = cell.position();
                let symbol = if at == self.start_point {
                    'S'
                } else if markers.contains(&at) {
                    'a'
                } else if route.contains(&at) && cell.kind() == CellKind::Passable {
                    '*'
                } else if cell.kind() == CellKind::Passable {
                    trail_symbol(cell.pheromone())
                } else {
                    cell.kind().symbol()
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shape_and_symbols() {
        let mut field = Field::new(3, 2).unwrap();
        field.set_kind(2, 0, CellKind::Wall);
        field.set_kind(2, 1, CellKind::Destination);
        let text = field.render_ascii(&[FieldCoordinate::new(1, 1)]);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows, vec!["S █", " a◎"]);
    }

    #[test]
    fn test_trail_symbol_grows_with_level() {
        assert_eq!(trail_symbol(1), ' ');
        assert_ne!(trail_symbol(1000), ' ');
        assert_eq!(trail_symbol(MAX_PHEROMONE), '#');
    }
}
