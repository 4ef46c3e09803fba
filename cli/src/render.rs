use othello_core::{Board, Player, Position, Renderer, Score};
use std::fmt;
use std::io::Write;

const HELP: &str = "\
# ----------------------------------------
#  h:
#    Show this help
#  q:
#    Quit the game
#  s:
#    Show the board
#  [row],[col]
#    Put a stone at (row, col)
# ----------------------------------------
";

const RULE: &str = "#---------------------------------";

/// Writes the game as plain text, in the layout players type coordinates against.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args).and_then(|()| self.out.flush()) {
            log::error!("failed to write to terminal: {err}");
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_board(&mut self, board: &Board, next: Player) {
        self.emit(format_args!("{board}\nNext: {}\n\n", next.symbol()));
    }

    fn render_help(&mut self) {
        self.emit(format_args!("{HELP}\n"));
    }

    fn render_invalid_placement(&mut self, pos: Position) {
        self.emit(format_args!("Can not put at {pos}\n"));
    }

    fn render_invalid_command(&mut self) {
        self.emit(format_args!("Invalid command.\nTo show help, input \"h\"\n\n"));
    }

    fn render_result(&mut self, score: &Score) {
        let winner = match score.winner() {
            Some(player) => player.symbol().to_string(),
            None => "draw".to_string(),
        };
        self.emit(format_args!(
            "{RULE}\n# RESULT\n{RULE}\n# {} : {}\n# {} : {}\n#\n#  winner : {winner}\n{RULE}\n",
            Player::Black.symbol(),
            score.black,
            Player::White.symbol(),
            score.white,
        ));
    }

    fn render_closing(&mut self) {
        self.emit(format_args!("Thank you for playing\n"));
    }
}
