//! Route export in sensor units.

use crate::error::{IoError, Result};
use antpath_core::FieldCoordinate;
use std::fmt::Write as _;
use std::path::Path;

/// Drops every interior point that continues in the same direction as the
/// previous step, leaving only the corners.
#[must_use]
pub fn collapse_collinear(route: &[FieldCoordinate]) -> Vec<FieldCoordinate> {
    if route.len() < 3 {
        return route.to_vec();
    }
    let mut corners = vec![route[0]];
    for window in route.windows(3) {
        let (a, b, c) = (window[0], window[1], window[2]);
        let cross = i64::from(b.x - a.x) * i64::from(c.y - b.y)
            - i64::from(b.y - a.y) * i64::from(c.x - b.x);
        if cross != 0 {
            corners.push(b);
        }
    }
    if let Some(&last) = route.last() {
        corners.push(last);
    }
    corners
}

/// Corners of `route` scaled back to sensor units.
#[must_use]
pub fn simplify_route(route: &[FieldCoordinate], cell_size: (f64, f64)) -> Vec<(f64, f64)> {
    collapse_collinear(route)
        .into_iter()
        .map(|p| (f64::from(p.x) * cell_size.0, f64::from(p.y) * cell_size.1))
        .collect()
}

/// Formats points as `x,y` lines.
#[must_use]
pub fn route_csv(points: &[(f64, f64)]) -> String {
    points.iter().fold(String::new(), |mut out, (x, y)| {
        let _ = writeln!(out, "{x},{y}");
        out
    })
}

pub fn write_route_csv<P: AsRef<Path>>(
    route: &[FieldCoordinate],
    cell_size: (f64, f64),
    path: P,
) -> Result<()> {
    let csv = route_csv(&simplify_route(route, cell_size));
    std::fs::write(&path, csv).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing route to {:?}", path.as_ref()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(i32, i32)]) -> Vec<FieldCoordinate> {
        points.iter().copied().map(FieldCoordinate::from).collect()
    }

    #[test]
    fn test_straight_line_keeps_endpoints() {
        let route = path(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(collapse_collinear(&route), path(&[(0, 0), (3, 0)]));
    }

    #[test]
    fn test_corner_is_kept() {
        let route = path(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(collapse_collinear(&route), path(&[(0, 0), (2, 0), (2, 2)]));
    }

    #[test]
    fn test_short_routes_unchanged() {
        assert!(collapse_collinear(&[]).is_empty());
        let pair = path(&[(0, 0), (0, 1)]);
        assert_eq!(collapse_collinear(&pair), pair);
    }

    #[test]
    fn test_scaled_csv() {
        let route = path(&[(0, 0), (1, 0), (1, 1)]);
        let points = simplify_route(&route, (0.5, 2.0));
        assert_eq!(points, vec![(0.0, 0.0), (0.5, 0.0), (0.5, 2.0)]);
        assert_eq!(route_csv(&points), "0,0\n0.5,0\n0.5,2\n");
    }

    #[test]
    fn test_write_route_csv() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("route.csv");
        write_route_csv(&path(&[(0, 0), (0, 3)]), (1.0, 1.0), &out).unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "0,0\n0,3\n");
    }
}
