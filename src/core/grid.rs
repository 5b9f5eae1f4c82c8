//! Grid: the playfield occupancy model.
//!
//! A fixed `GRID_WIDTH x GRID_HEIGHT` matrix stored as a flat row-major
//! array (row 0 = top). The grid is mutated only by `merge` and
//! `clear_completed_rows`; everything else is read-only inspection.
//! Rows above the board (negative y) are treated as empty space so a
//! piece can sit partially off-screen right after spawning.

use arrayvec::ArrayVec;

use crate::core::catalog::Shape;
use crate::types::{Cell, PieceId, GRID_HEIGHT, GRID_WIDTH};

const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The playfield. All operations are total over their documented domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether a shape placed with its anchor at (x, y) hits a wall, the
    /// floor, or an occupied cell.
    ///
    /// Horizontal bounds apply to every filled cell. Rows above the board
    /// never collide and are never indexed.
    pub fn would_collide(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.offsets().any(|(i, j)| {
            let cx = x + j;
            let cy = y + i;
            if cx < 0 || cx >= GRID_WIDTH as i8 || cy >= GRID_HEIGHT as i8 {
                return true;
            }
            if cy < 0 {
                return false;
            }
            self.cells[(cy as usize) * (GRID_WIDTH as usize) + cx as usize].is_some()
        })
    }

    /// Lock a shape into the grid, tagging its cells with the catalog id.
    ///
    /// Filled cells that land outside the grid are silently skipped; this
    /// tolerance is part of the contract, not an error.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, id: PieceId) {
        for (i, j) in shape.offsets() {
            if let Some(idx) = Self::index(x + j, y + i) {
                self.cells[idx] = Some(id);
            }
        }
    }

    /// Whether every cell of row `y` is occupied.
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        self.cells[start..start + GRID_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every completed row and re-insert empty rows at the top,
    /// preserving the relative order of surviving rows.
    ///
    /// Returns the cleared row indices, bottom to top. Two-pointer compact
    /// over the flat array; no allocation.
    pub fn clear_completed_rows(&mut self) -> ArrayVec<usize, { GRID_HEIGHT as usize }> {
        let mut cleared = ArrayVec::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_complete(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Empty the whole grid (session reset).
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    #[cfg(test)]
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
