use crate::*;

mod random;
#[cfg(test)]
pub(crate) mod scripted;

/// Source of the two kinds of draws tile spawning needs.
pub trait TileRng {
    /// Uniform draw from `0..bound`.
    fn pick_index(&mut self, bound: Coord) -> Coord;

    /// Uniform draw from `1..=100`.
    fn roll_percent(&mut self) -> u8;
}

/// Places a 2 (90%) or a 4 (10%) on a random empty cell.
///
/// Returns `false` without touching the grid when it is already full.
pub fn populate_empty_cell<R: TileRng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    populate_empty_cell_with_chance(grid, rng, TWO_CHANCE_PERCENT)
}

/// Like [`populate_empty_cell`], placing a 2 when the percent roll is at most
/// `two_chance_percent`.
pub fn populate_empty_cell_with_chance<R: TileRng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    two_chance_percent: u8,
) -> bool {
    if grid.is_full() {
        return false;
    }

    // boards are small, plain rejection sampling is enough
    let size = grid.size();
    let coords = loop {
        let coords = (rng.pick_index(size), rng.pick_index(size));
        if grid.cell_at(coords) == 0 {
            break coords;
        }
    };

    let tile = if rng.roll_percent() <= two_chance_percent {
        2
    } else {
        4
    };
    grid.set_cell(coords, tile);
    log::debug!("Spawned {} at {:?}", tile, coords);
    true
}

/// Fresh `size`×`size` grid holding the default number of starting tiles.
pub fn create_grid<R: TileRng + ?Sized>(size: Coord, rng: &mut R) -> Grid {
    GameConfig::with_size(size).create_grid(rng)
}
