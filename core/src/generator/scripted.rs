use alloc::collections::VecDeque;

use super::TileRng;
use crate::Coord;

/// Replays fixed draws so spawn placement can be asserted exactly.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedRolls {
    indices: VecDeque<Coord>,
    percents: VecDeque<u8>,
}

impl ScriptedRolls {
    pub(crate) fn new(indices: &[Coord], percents: &[u8]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            percents: percents.iter().copied().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.indices.is_empty() && self.percents.is_empty()
    }
}

impl TileRng for ScriptedRolls {
    fn pick_index(&mut self, bound: Coord) -> Coord {
        let index = self.indices.pop_front().expect("ran out of scripted indices");
        assert!(index < bound, "scripted index {index} outside 0..{bound}");
        index
    }

    fn roll_percent(&mut self) -> u8 {
        self.percents.pop_front().expect("ran out of scripted percents")
    }
}
