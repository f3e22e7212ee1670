use alloc::vec::Vec;

use crate::*;

/// Whether moving toward `direction` would change `grid`, simulated on a copy.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    let mut scratch = grid.clone();
    apply_move(direction, &mut scratch)
}

/// Directions that would change `grid`, in [`Direction::ALL`] order.
pub fn available_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(grid, direction))
        .collect()
}

/// The game is over once the grid is full and no direction changes it.
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_full()
        && !Direction::ALL
            .into_iter()
            .any(|direction| can_move(grid, direction))
}
