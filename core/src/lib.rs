#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use line::*;
pub use resolver::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod grid;
mod line;
mod resolver;
mod types;

/// Side length of a standard board.
pub const DEFAULT_SIZE: Coord = 4;

/// Tiles placed on a fresh board.
pub const NUM_STARTING_TILES: u8 = 2;

/// Percent rolls at or below this spawn a 2, the rest spawn a 4.
pub const TWO_CHANCE_PERCENT: u8 = 90;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub starting_tiles: u8,
    pub two_chance_percent: u8,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, starting_tiles: u8, two_chance_percent: u8) -> Self {
        Self {
            size,
            starting_tiles,
            two_chance_percent,
        }
    }

    pub fn new(size: Coord, starting_tiles: u8, two_chance_percent: u8) -> Self {
        let mut config = Self::new_unchecked(
            size.clamp(1, Coord::MAX),
            starting_tiles,
            two_chance_percent.min(100),
        );
        let max_tiles = u8::try_from(config.total_cells()).unwrap_or(u8::MAX);
        config.starting_tiles = config.starting_tiles.min(max_tiles);
        config
    }

    pub fn with_size(size: Coord) -> Self {
        Self::new(size, NUM_STARTING_TILES, TWO_CHANCE_PERCENT)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Empty board with `starting_tiles` random tiles on distinct cells.
    pub fn create_grid<R: TileRng + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut grid = Grid::empty(self.size);
        for placed in 0..self.starting_tiles {
            if !populate_empty_cell_with_chance(&mut grid, rng, self.two_chance_percent) {
                log::warn!(
                    "Grid already full, placed {} of {} starting tiles",
                    placed,
                    self.starting_tiles
                );
                break;
            }
        }
        grid
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, NUM_STARTING_TILES, TWO_CHANCE_PERCENT)
    }
}
