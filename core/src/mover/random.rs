use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Debug strategy that plays a uniformly random legal cell every turn and never quits.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: SmallRng,
}

impl RandomMover {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks one legal cell of `availability`. An empty grid is a caller error.
    pub fn pick(&mut self, availability: &AvailabilityGrid) -> Result<Position> {
        let legal: Vec<Position> = availability.legal_positions().collect();
        legal
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMoves)
    }
}

impl CommandSource for RandomMover {
    fn next_command(&mut self, game: &GameState) -> Result<Command> {
        let pos = self.pick(game.availability())?;
        log::debug!("auto-move for {}: {}", game.next(), pos);
        Ok(Command::Place(pos))
    }
}
