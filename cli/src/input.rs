use othello_core::{Command, CommandSource, GameState, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "Input command: ";

/// Reads one command per line, prompting before each read.
///
/// End of input counts as `q`, so piping a script into the game always terminates.
pub struct LineSource<R, W> {
    input: R,
    prompt: W,
    line: String,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self {
            input,
            prompt,
            line: String::new(),
        }
    }

    fn read_line(&mut self) -> Option<&str> {
        if let Err(err) = write!(self.prompt, "{PROMPT}").and_then(|()| self.prompt.flush()) {
            log::warn!("failed to show prompt: {err}");
        }

        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => {
                log::info!("end of input");
                None
            }
            Ok(_) => Some(self.line.trim_end_matches(['\n', '\r'])),
            Err(err) => {
                log::warn!("failed to read command: {err}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> CommandSource for LineSource<R, W> {
    fn next_command(&mut self, _game: &GameState) -> Result<Command> {
        Ok(self.read_line().map_or(Command::Quit, Command::parse))
    }
}
