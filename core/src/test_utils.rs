//! Scripted collaborators for driving a [`PlayEngine`] without a terminal.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

/// One call received by a [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    Board(Player),
    Help,
    InvalidPlacement(Position),
    InvalidCommand,
    Result(Score),
    Closing,
}

/// Renderer that remembers what it was asked to show.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<Rendered>,
    /// Stone count of every board shown, in order.
    pub stone_counts: Vec<usize>,
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, board: &Board, next: Player) {
        self.stone_counts.push(board.occupied_count());
        self.events.push(Rendered::Board(next));
    }

    fn render_help(&mut self) {
        self.events.push(Rendered::Help);
    }

    fn render_invalid_placement(&mut self, pos: Position) {
        self.events.push(Rendered::InvalidPlacement(pos));
    }

    fn render_invalid_command(&mut self) {
        self.events.push(Rendered::InvalidCommand);
    }

    fn render_result(&mut self, score: &Score) {
        self.events.push(Rendered::Result(*score));
    }

    fn render_closing(&mut self) {
        self.events.push(Rendered::Closing);
    }
}

/// Source that replays fixed commands, then quits.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    commands: VecDeque<Command>,
}

impl ScriptedSource {
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            commands: lines.iter().map(|line| Command::parse(line)).collect(),
        }
    }
}

impl CommandSource for ScriptedSource {
    fn next_command(&mut self, _game: &GameState) -> Result<Command> {
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }
}
