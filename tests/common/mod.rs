use antpath_core::field::Field;
use antpath_core::{CellKind, FieldCoordinate};
use std::io::Write;
use tempfile::NamedTempFile;

/// Scan line that stretches the extent to 10 units on both axes, so a 10x10
/// grid maps one sensor unit to one cell.
#[allow(dead_code)]
pub const UNIT_EXTENT: &str = "0,0,0,10,end,1.5707963267948966,10,boundary";

#[allow(dead_code)]
pub fn scan_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Fluent builder for hand-made fields.
#[allow(dead_code)]
pub struct FieldBuilder {
    width: usize,
    height: usize,
    start: FieldCoordinate,
    kinds: Vec<(i32, i32, CellKind)>,
}

#[allow(dead_code)]
impl FieldBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start: FieldCoordinate::default(),
            kinds: Vec::new(),
        }
    }

    pub fn with_start(mut self, x: i32, y: i32) -> Self {
        self.start = FieldCoordinate::new(x, y);
        self
    }

    pub fn with_wall(mut self, x: i32, y: i32) -> Self {
        self.kinds.push((x, y, CellKind::Wall));
        self
    }

    pub fn with_destination(mut self, x: i32, y: i32) -> Self {
        self.kinds.push((x, y, CellKind::Destination));
        self
    }

    /// Walls on the whole outer ring.
    pub fn walled(mut self) -> Self {
        let (w, h) = (self.width as i32, self.height as i32);
        for x in 0..w {
            self.kinds.push((x, 0, CellKind::Wall));
            self.kinds.push((x, h - 1, CellKind::Wall));
        }
        for y in 0..h {
            self.kinds.push((0, y, CellKind::Wall));
            self.kinds.push((w - 1, y, CellKind::Wall));
        }
        self
    }

    pub fn build(self) -> Field {
        let mut field = Field::new(self.width, self.height).unwrap();
        field.set_start_point(self.start).unwrap();
        for (x, y, kind) in self.kinds {
            field.set_kind(x, y, kind);
        }
        field
    }
}
