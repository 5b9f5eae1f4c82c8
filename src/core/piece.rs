//! Active piece: the falling tetromino and its collision-gated commands.
//!
//! The piece owns its in-play matrix (rotation is baked into the matrix,
//! not tracked as a separate state) plus the top-left anchor in grid
//! coordinates. Every command checks the grid first and applies
//! atomically or not at all.

use crate::core::catalog::{spawn_shape, Shape};
use crate::core::grid::Grid;
use crate::types::{PieceId, GRID_WIDTH};

/// Spawn anchor: horizontally centered, top row.
pub const SPAWN_X: i8 = (GRID_WIDTH / 2) as i8 - 2;
pub const SPAWN_Y: i8 = 0;

/// The currently falling piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub id: PieceId,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece in spawn orientation at the spawn anchor.
    pub fn spawn(id: PieceId) -> Self {
        Self {
            id,
            shape: spawn_shape(id),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Re-anchor an existing matrix at the spawn position (hold swaps keep
    /// whatever rotation the matrix already carries).
    pub fn at_spawn(id: PieceId, shape: Shape) -> Self {
        Self {
            id,
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Attempt a translation. Blocked moves are silent no-ops.
    pub fn try_shift(&mut self, grid: &Grid, dx: i8, dy: i8) -> bool {
        if grid.would_collide(&self.shape, self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Attempt a clockwise rotation at the current anchor.
    ///
    /// No wall-kick search: a rotation that collides is rejected and the
    /// prior orientation stays.
    pub fn try_rotate(&mut self, grid: &Grid) -> bool {
        let rotated = self.shape.rotated();
        if grid.would_collide(&rotated, self.x, self.y) {
            return false;
        }
        self.shape = rotated;
        true
    }

    /// Shift down until blocked. Settles instantly but does not merge;
    /// the session's next gravity step performs the lock.
    pub fn drop_to_floor(&mut self, grid: &Grid) -> u8 {
        let mut fallen = 0;
        while self.try_shift(grid, 0, 1) {
            fallen += 1;
        }
        fallen
    }

    /// Whether the piece collides where it currently sits (spawn-blocked
    /// test for the game-over condition).
    pub fn is_blocked(&self, grid: &Grid) -> bool {
        grid.would_collide(&self.shape, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_HEIGHT;

    #[test]
    fn test_spawn_anchor() {
        let piece = ActivePiece::spawn(PieceId(1));
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
    }

    #[test]
    fn test_shift_applies_when_free() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceId(1));

        assert!(piece.try_shift(&grid, 1, 0));
        assert_eq!(piece.x, 4);
        assert!(piece.try_shift(&grid, -1, 0));
        assert_eq!(piece.x, 3);
        assert!(piece.try_shift(&grid, 0, 1));
        assert_eq!(piece.y, 1);
    }

    #[test]
    fn test_shift_rejected_at_wall() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceId(4));

        let mut moved = 0;
        for _ in 0..12 {
            if piece.try_shift(&grid, -1, 0) {
                moved += 1;
            }
        }
        // O piece spawns at x=3 and stops at the left wall.
        assert_eq!(moved, 3);
        assert_eq!(piece.x, 0);
    }

    #[test]
    fn test_shift_blocked_by_occupied_cell() {
        let mut grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceId(4));
        grid.set(2, 1, Some(PieceId(0)));

        // O at (3,0) covers columns 3..=4; the blocker at (2,1) stops a
        // left shift.
        assert!(!piece.try_shift(&grid, -1, 0));
        assert_eq!(piece.x, 3);
    }

    #[test]
    fn test_rotate_applies_when_free() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceId(0));

        // Horizontal I with headroom rotates to vertical in place.
        assert!(piece.try_rotate(&grid));
        assert_eq!((piece.shape.rows(), piece.shape.cols()), (4, 1));
    }

    #[test]
    fn test_rotate_rejected_when_colliding() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceId(0));

        // Horizontal I resting on the floor: rotating to vertical would
        // poke three rows below the board, so the command is rejected and
        // the orientation is unchanged.
        piece.drop_to_floor(&grid);
        assert_eq!(piece.y, (GRID_HEIGHT - 1) as i8);

        let before = piece.shape;
        assert!(!piece.try_rotate(&grid));
        assert_eq!(piece.shape, before);
    }

    #[test]
    fn test_drop_to_floor_counts_rows() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceId(4));

        let fallen = piece.drop_to_floor(&grid);
        // O is 2 tall: from y=0 down to y=18.
        assert_eq!(fallen, (GRID_HEIGHT - 2) as u8);
        assert_eq!(piece.y, (GRID_HEIGHT - 2) as i8);

        // Further drops are no-ops.
        assert_eq!(piece.drop_to_floor(&grid), 0);
    }

    #[test]
    fn test_drop_does_not_merge() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceId(4));
        piece.drop_to_floor(&grid);

        // The grid is untouched until the session locks the piece.
        assert_eq!(grid.get(4, (GRID_HEIGHT - 1) as i8), Some(None));
    }

    #[test]
    fn test_spawn_blocked_detection() {
        let mut grid = Grid::new();
        let piece = ActivePiece::spawn(PieceId(4));
        assert!(!piece.is_blocked(&grid));

        grid.set(4, 0, Some(PieceId(0)));
        assert!(piece.is_blocked(&grid));
    }
}
