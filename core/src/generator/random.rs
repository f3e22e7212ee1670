use rand::{Rng, RngCore};

use super::*;

/// Any `rand` generator can drive tile spawning, seed a `SmallRng` for
/// reproducible games.
impl<R: RngCore> TileRng for R {
    fn pick_index(&mut self, bound: Coord) -> Coord {
        self.random_range(0..bound)
    }

    fn roll_percent(&mut self) -> u8 {
        self.random_range(1..=100)
    }
}
