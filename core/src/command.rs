use core::convert::Infallible;
use core::str::FromStr;

use crate::*;

/// A single line of player input, already interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Show,
    Place(Position),
    Invalid,
}

impl Command {
    /// Parses `q`, `h`, `s` or `row,col` with single digits in `0..8`.
    /// Anything else, including surrounding text, is [`Command::Invalid`].
    pub fn parse(line: &str) -> Self {
        match line {
            "q" => Self::Quit,
            "h" => Self::Help,
            "s" => Self::Show,
            _ => parse_placement(line).map_or(Self::Invalid, Self::Place),
        }
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn parse_placement(line: &str) -> Option<Position> {
    let (row, col) = line.split_once(',')?;
    Position::new(parse_coord(row)?, parse_coord(col)?).ok()
}

fn parse_coord(s: &str) -> Option<Coord> {
    let mut chars = s.chars();
    let digit = chars.next()?.to_digit(EDGE_LENGTH.into())?;
    chars.next().is_none().then_some(digit as Coord)
}
