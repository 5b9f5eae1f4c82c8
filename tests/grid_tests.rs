//! Grid behavior through the public API: collision, merging, row clears.

use blockfall::core::{spawn_shape, Grid, Shape};
use blockfall::types::{PieceId, GRID_HEIGHT, GRID_WIDTH};

fn o_shape() -> Shape {
    spawn_shape(PieceId(4))
}

fn i_shape() -> Shape {
    spawn_shape(PieceId(0))
}

/// Merge O pieces side by side until the bottom two rows are full.
fn fill_bottom_two_rows(grid: &mut Grid) {
    for x in (0..GRID_WIDTH as i8).step_by(2) {
        grid.merge(&o_shape(), x, (GRID_HEIGHT - 2) as i8, PieceId(4));
    }
}

#[test]
fn empty_grid_has_no_collisions_inside_bounds() {
    let grid = Grid::new();
    let shape = o_shape();

    assert!(!grid.would_collide(&shape, 0, 0));
    assert!(!grid.would_collide(
        &shape,
        (GRID_WIDTH - 2) as i8,
        (GRID_HEIGHT - 2) as i8
    ));
}

#[test]
fn walls_and_floor_always_collide() {
    let grid = Grid::new();
    let shape = o_shape();

    assert!(grid.would_collide(&shape, -1, 0));
    assert!(grid.would_collide(&shape, (GRID_WIDTH - 1) as i8, 0));
    assert!(grid.would_collide(&shape, 0, (GRID_HEIGHT - 1) as i8));
}

#[test]
fn rows_above_the_top_do_not_collide() {
    let grid = Grid::new();
    let shape = o_shape();

    // Vertical overshoot above the playfield is tolerated as long as the
    // columns stay in range.
    assert!(!grid.would_collide(&shape, 3, -1));
    assert!(!grid.would_collide(&shape, 3, -4));
    assert!(grid.would_collide(&shape, -1, -4));
}

#[test]
fn merge_records_piece_identity() {
    let mut grid = Grid::new();
    grid.merge(&o_shape(), 4, (GRID_HEIGHT - 2) as i8, PieceId(4));

    assert_eq!(grid.get(4, (GRID_HEIGHT - 2) as i8), Some(Some(PieceId(4))));
    assert_eq!(grid.get(5, (GRID_HEIGHT - 1) as i8), Some(Some(PieceId(4))));
    assert_eq!(grid.get(3, (GRID_HEIGHT - 1) as i8), Some(None));
}

#[test]
fn merge_skips_cells_outside_the_grid() {
    let mut grid = Grid::new();

    // Anchor above the top: only the bottom half of the O lands.
    grid.merge(&o_shape(), 0, -1, PieceId(4));
    assert_eq!(grid.get(0, 0), Some(Some(PieceId(4))));
    assert_eq!(grid.get(1, 0), Some(Some(PieceId(4))));
    assert_eq!(grid.get(0, 1), Some(None));
}

#[test]
fn merged_cells_block_later_pieces() {
    let mut grid = Grid::new();
    grid.merge(&o_shape(), 4, (GRID_HEIGHT - 2) as i8, PieceId(4));

    assert!(grid.would_collide(&o_shape(), 4, (GRID_HEIGHT - 4) as i8 + 1));
    assert!(!grid.would_collide(&o_shape(), 4, (GRID_HEIGHT - 4) as i8));
}

#[test]
fn complete_rows_are_detected_and_cleared() {
    let mut grid = Grid::new();
    fill_bottom_two_rows(&mut grid);

    assert!(grid.is_row_complete((GRID_HEIGHT - 1) as usize));
    assert!(grid.is_row_complete((GRID_HEIGHT - 2) as usize));
    assert!(!grid.is_row_complete((GRID_HEIGHT - 3) as usize));

    let cleared = grid.clear_completed_rows();
    assert_eq!(cleared.len(), 2);

    for x in 0..GRID_WIDTH as i8 {
        assert_eq!(grid.get(x, (GRID_HEIGHT - 1) as i8), Some(None));
        assert_eq!(grid.get(x, (GRID_HEIGHT - 2) as i8), Some(None));
    }
}

#[test]
fn rows_above_a_clear_shift_down() {
    let mut grid = Grid::new();
    fill_bottom_two_rows(&mut grid);

    // A marker resting on top of the full rows.
    grid.merge(&i_shape(), 0, (GRID_HEIGHT - 3) as i8, PieceId(0));

    grid.clear_completed_rows();

    // The marker falls by the two cleared rows.
    assert_eq!(grid.get(0, (GRID_HEIGHT - 1) as i8), Some(Some(PieceId(0))));
    assert_eq!(grid.get(3, (GRID_HEIGHT - 1) as i8), Some(Some(PieceId(0))));
    assert_eq!(grid.get(4, (GRID_HEIGHT - 1) as i8), Some(None));
    assert_eq!(grid.get(0, (GRID_HEIGHT - 3) as i8), Some(None));
}

#[test]
fn partial_rows_survive_a_clear() {
    let mut grid = Grid::new();
    fill_bottom_two_rows(&mut grid);
    // One incomplete row above, missing columns 4..10.
    grid.merge(&i_shape(), 0, (GRID_HEIGHT - 3) as i8, PieceId(0));

    let cleared = grid.clear_completed_rows();
    assert_eq!(cleared.len(), 2);

    // Nothing in the surviving row was lost.
    let occupied: usize = (0..GRID_WIDTH as i8)
        .filter(|&x| grid.get(x, (GRID_HEIGHT - 1) as i8) == Some(Some(PieceId(0))))
        .count();
    assert_eq!(occupied, 4);
}

#[test]
fn clear_resets_every_cell() {
    let mut grid = Grid::new();
    fill_bottom_two_rows(&mut grid);

    grid.clear();
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(None));
        }
    }
}

#[test]
fn get_out_of_bounds_is_none() {
    let grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT as i8), None);
}
