use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    /// Full board with no move left, only restart or quit make progress.
    Over,
    Quit,
}

impl EngineState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Quit)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Outcome of resolving one intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Unrecognized input, nothing happened.
    Ignored,
    /// The direction could not move any tile.
    NoChange,
    Moved { spawned: bool },
    Restarted,
    Quit,
}

impl StepOutcome {
    /// Whether this outcome could have changed what the frontend shows.
    pub const fn has_update(self) -> bool {
        use StepOutcome::*;
        match self {
            Ignored | NoChange => false,
            Moved { .. } | Restarted | Quit => true,
        }
    }
}

/// One game: a grid, the random source feeding it and the session state.
#[derive(Clone, Debug)]
pub struct Session<R> {
    config: GameConfig,
    grid: Grid,
    rng: R,
    state: EngineState,
}

impl<R: TileRng> Session<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let grid = config.create_grid(&mut rng);
        let mut session = Self {
            config,
            grid,
            rng,
            state: Default::default(),
        };
        session.refresh_state();
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn step(&mut self, intent: MoveIntent) -> Result<StepOutcome> {
        use StepOutcome::*;

        if self.state.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        let outcome = match intent {
            MoveIntent::Restart => {
                self.restart();
                Restarted
            }
            MoveIntent::Quit => {
                self.state = EngineState::Quit;
                log::debug!("Session quit");
                return Ok(Quit);
            }
            MoveIntent::Unknown => Ignored,
            MoveIntent::Up => self.slide(Direction::Up),
            MoveIntent::Down => self.slide(Direction::Down),
            MoveIntent::Left => self.slide(Direction::Left),
            MoveIntent::Right => self.slide(Direction::Right),
        };

        self.refresh_state();
        Ok(outcome)
    }

    fn slide(&mut self, direction: Direction) -> StepOutcome {
        if !apply_move(direction, &mut self.grid) {
            return StepOutcome::NoChange;
        }
        let spawned = populate_empty_cell_with_chance(
            &mut self.grid,
            &mut self.rng,
            self.config.two_chance_percent,
        );
        StepOutcome::Moved { spawned }
    }

    /// Fresh random grid copied over the current storage. No extra tile spawns.
    fn restart(&mut self) {
        let fresh = self.config.create_grid(&mut self.rng);
        self.grid.replace_with(&fresh);
        log::debug!("Session restarted");
    }

    fn refresh_state(&mut self) {
        self.state = if is_game_over(&self.grid) {
            EngineState::Over
        } else {
            EngineState::Active
        };
    }
}
