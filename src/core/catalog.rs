//! Shape catalog: the seven tetromino matrices and their colors.
//!
//! Shapes are small boolean matrices with per-orientation dimensions
//! (the I piece spawns 1x4 and rotates to 4x1). Rotation is a pure
//! transform over the in-play matrix; no per-type rotation state exists.

use crate::types::{PieceId, PIECE_KINDS};

/// Maximum matrix dimension across all shapes and rotations.
pub const MAX_SHAPE_DIM: usize = 4;

/// A tetromino matrix. Immutable; rotations produce new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    rows: u8,
    cols: u8,
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                cells[i][j] = v != 0;
            }
        }
        Self {
            cells,
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row i, column j) is filled.
    pub fn filled(&self, i: u8, j: u8) -> bool {
        i < self.rows && j < self.cols && self.cells[i as usize][j as usize]
    }

    /// Iterate the filled cells as (row, column) offsets from the anchor.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |i| {
            (0..self.cols)
                .filter(move |&j| self.cells[i as usize][j as usize])
                .map(move |j| (i as i8, j as i8))
        })
    }

    /// The matrix rotated 90 degrees clockwise.
    ///
    /// Reverse the row order, then transpose: `out[j][rows-1-i] = in[i][j]`.
    /// Dimensions swap, so four applications reproduce the original.
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let r = self.rows as usize;
        let c = self.cols as usize;
        for i in 0..r {
            for j in 0..c {
                cells[j][r - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

/// Spawn-orientation matrices, indexed by catalog order I, T, L, J, O, S, Z.
const SPAWN_MATRICES: [&[&[u8]]; PIECE_KINDS] = [
    &[&[1, 1, 1, 1]],             // I
    &[&[1, 1, 1], &[0, 1, 0]],    // T
    &[&[1, 1, 1], &[1, 0, 0]],    // L
    &[&[1, 1, 1], &[0, 0, 1]],    // J
    &[&[1, 1], &[1, 1]],          // O
    &[&[0, 1, 1], &[1, 1, 0]],    // S
    &[&[1, 1, 0], &[0, 1, 1]],    // Z
];

/// Render colors paired 1:1 with shape identity, same index space.
const COLORS: [(u8, u8, u8); PIECE_KINDS] = [
    (0, 225, 225), // I cyan
    (0, 0, 225),   // T blue
    (225, 165, 0), // L orange
    (225, 225, 0), // J yellow
    (0, 225, 0),   // O green
    (128, 0, 128), // S purple
    (225, 0, 0),   // Z red
];

/// The spawn-orientation matrix for a catalog entry.
pub fn spawn_shape(id: PieceId) -> Shape {
    Shape::from_rows(SPAWN_MATRICES[id.index()])
}

/// The render color for a catalog entry.
pub fn color(id: PieceId) -> (u8, u8, u8) {
    COLORS[id.index()]
}
