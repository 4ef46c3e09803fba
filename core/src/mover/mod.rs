use alloc::boxed::Box;

use crate::*;
pub use random::*;

mod random;

/// Supplies the next command for the game, from a person or from a strategy.
pub trait CommandSource {
    fn next_command(&mut self, game: &GameState) -> Result<Command>;
}

impl<S: CommandSource + ?Sized> CommandSource for Box<S> {
    fn next_command(&mut self, game: &GameState) -> Result<Command> {
        (**self).next_command(game)
    }
}
