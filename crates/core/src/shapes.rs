//! Shapes module - tetromino shape matrices and their colors
//!
//! Each piece kind has one canonical spawn matrix. Rotation never touches the
//! catalog: [`ShapeMatrix::rotate_cw`] returns a fresh matrix derived from the
//! one it is called on.

use crate::types::{PieceKind, Rgb};

/// Largest bounding box side of any tetromino (the I piece)
pub const MAX_SHAPE_SIDE: usize = 4;

/// One rotation state of a piece: a rectangular grid of occupied flags.
///
/// Only the top-left `height x width` corner of `cells` is meaningful;
/// everything outside it is always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of `'#'` (occupied) and any other char (empty).
    ///
    /// All rows must have the same length and fit in a 4x4 box.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(height <= MAX_SHAPE_SIDE && width <= MAX_SHAPE_SIDE);

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "shape rows must be rectangular");
            for (x, ch) in row.chars().enumerate() {
                cells[y][x] = ch == '#';
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at column `x`, row `y` of the bounding box is occupied.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Offsets `(dx, dy)` of every occupied cell, row-major from the top-left.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise around the bounding box.
    ///
    /// Transpose, then reverse row order: `new[r][c] = old[h - 1 - c][r]`.
    /// The bounding box swaps width and height; no offset is applied.
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }

        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Spawn matrix for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&["####"]),
        PieceKind::J => ShapeMatrix::from_rows(&["#..", "###"]),
        PieceKind::L => ShapeMatrix::from_rows(&["..#", "###"]),
        PieceKind::O => ShapeMatrix::from_rows(&["##", "##"]),
        PieceKind::S => ShapeMatrix::from_rows(&[".##", "##."]),
        PieceKind::T => ShapeMatrix::from_rows(&[".#.", "###"]),
        PieceKind::Z => ShapeMatrix::from_rows(&["##.", ".##"]),
    }
}

/// Display color associated with a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(spawn_shape(kind).filled_cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        let t = spawn_shape(PieceKind::T);
        let r = t.rotate_cw();
        assert_eq!(r, ShapeMatrix::from_rows(&["#.", "##", "#."]));
        assert_eq!((r.width(), r.height()), (2, 3));
    }

    #[test]
    fn rotate_i_swaps_bounding_box() {
        let i = spawn_shape(PieceKind::I).rotate_cw();
        assert_eq!((i.width(), i.height()), (1, 4));
        assert_eq!(
            i.filled_cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (0, 2), (0, 3)]
        );
    }

    #[test]
    fn four_rotations_return_to_spawn() {
        for kind in PieceKind::ALL {
            let spawn = spawn_shape(kind);
            let back = spawn.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(back, spawn, "{kind:?}");
        }
    }

    #[test]
    fn rotation_does_not_touch_catalog() {
        let _ = spawn_shape(PieceKind::L).rotate_cw();
        assert_eq!(
            spawn_shape(PieceKind::L),
            ShapeMatrix::from_rows(&["..#", "###"])
        );
    }

    #[test]
    fn colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(piece_color(a), piece_color(b));
                }
            }
        }
    }
}
