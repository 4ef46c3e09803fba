use serde::{Deserialize, Serialize};

use crate::*;

/// Output side of a game. Implementations only display; they never change state.
pub trait Renderer {
    fn render_board(&mut self, board: &Board, next: Player);
    fn render_help(&mut self);
    fn render_invalid_placement(&mut self, pos: Position);
    fn render_invalid_command(&mut self);
    fn render_result(&mut self, score: &Score);
    fn render_closing(&mut self);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    NotStarted,
    Running,
    Ended,
}

impl EngineState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Turn loop for a single game: reads commands from `S`, shows everything through `R`.
///
/// An engine plays exactly one game. Once ended it refuses to start again,
/// so a new game needs a new engine.
#[derive(Debug)]
pub struct PlayEngine<R, S> {
    renderer: R,
    source: S,
    game: GameState,
    state: EngineState,
    result: Option<Score>,
}

impl<R: Renderer, S: CommandSource> PlayEngine<R, S> {
    pub fn new(renderer: R, source: S) -> Self {
        Self {
            renderer,
            source,
            game: GameState::new(),
            state: Default::default(),
            result: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Final score, present only when the game ended without a quit.
    pub fn result(&self) -> Option<Score> {
        self.result
    }

    /// Resets the board to the opening layout and shows it.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            EngineState::Running => return Err(GameError::AlreadyRunning),
            EngineState::Ended => return Err(GameError::AlreadyEnded),
            EngineState::NotStarted => {}
        }

        self.game = GameState::new();
        self.state = EngineState::Running;
        log::info!("game started, {} to move", self.game.next());

        self.renderer.render_help();
        self.renderer.render_board(self.game.board(), self.game.next());
        Ok(())
    }

    /// Handles one command and returns the state afterwards.
    pub fn step(&mut self) -> Result<EngineState> {
        self.check_running()?;

        match self.source.next_command(&self.game)? {
            Command::Quit => {
                log::info!("quit after {} moves", self.game.move_count());
                self.end_game(None);
            }
            Command::Help => self.renderer.render_help(),
            Command::Show => self.renderer.render_board(self.game.board(), self.game.next()),
            Command::Place(pos) => self.place(pos),
            Command::Invalid => {
                log::debug!("invalid command");
                self.renderer.render_invalid_command();
            }
        }

        Ok(self.state)
    }

    /// Starts the game and steps until it ends.
    pub fn run(&mut self) -> Result<Option<Score>> {
        self.start()?;
        while self.step()?.is_running() {}
        Ok(self.result)
    }

    fn place(&mut self, pos: Position) {
        match self.game.place(pos) {
            PlaceOutcome::Rejected => self.renderer.render_invalid_placement(pos),
            PlaceOutcome::Placed => {
                self.renderer.render_board(self.game.board(), self.game.next());
            }
            PlaceOutcome::GameOver => {
                self.renderer.render_board(self.game.board(), self.game.next());
                self.end_game(Some(self.game.score()));
            }
        }
    }

    fn end_game(&mut self, result: Option<Score>) {
        if self.state.is_finished() {
            return;
        }

        if let Some(score) = &result {
            log::info!(
                "game over: black {} white {}, winner {:?}",
                score.black,
                score.white,
                score.winner()
            );
            self.renderer.render_result(score);
        }
        self.renderer.render_closing();
        self.result = result;
        self.state = EngineState::Ended;
    }

    fn check_running(&self) -> Result<()> {
        match self.state {
            EngineState::Running => Ok(()),
            EngineState::Ended => Err(GameError::AlreadyEnded),
            EngineState::NotStarted => Err(GameError::NotStarted),
        }
    }
}
