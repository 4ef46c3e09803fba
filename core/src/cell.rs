use core::ops::Not;
use serde::{Deserialize, Serialize};

use crate::*;

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Character used for this cell in the text board format.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '_',
            Self::Black => 'x',
            Self::White => 'o',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(Self::Empty),
            'x' => Some(Self::Black),
            'o' => Some(Self::White),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

/// One of the two sides of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'x',
            Self::White => 'o',
        }
    }
}

impl Default for Player {
    /// Black always moves first.
    fn default() -> Self {
        Self::Black
    }
}

impl Not for Player {
    type Output = Self;

    /// Gets the opponent.
    fn not(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl TryFrom<Cell> for Player {
    type Error = GameError;

    fn try_from(cell: Cell) -> Result<Self> {
        match cell {
            Cell::Black => Ok(Player::Black),
            Cell::White => Ok(Player::White),
            Cell::Empty => Err(GameError::NotAPlayer),
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Black => "Black",
            Self::White => "White",
        })
    }
}
