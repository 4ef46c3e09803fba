use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Number of cells along one edge of the board.
pub const EDGE_LENGTH: Coord = 8;

/// Total number of cells on the board.
pub const NUM_CELLS: usize = (EDGE_LENGTH as usize) * (EDGE_LENGTH as usize);

/// Shape of every grid in the crate, in `ndarray` form.
pub(crate) const GRID_SHAPE: [usize; 2] = [EDGE_LENGTH as usize, EDGE_LENGTH as usize];

/// Row and column step taken when scanning along one compass direction.
pub type Delta = (i8, i8);

/// Scan order: N, NE, E, SE, S, SW, W, NW.
pub const DIRECTIONS: [Delta; 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// A cell on the board, always inside `0..EDGE_LENGTH` on both axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: Coord,
    col: Coord,
}

#[derive(Deserialize)]
struct RawPosition {
    row: Coord,
    col: Coord,
}

impl TryFrom<RawPosition> for Position {
    type Error = GameError;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Self::new(raw.row, raw.col)
    }
}

impl Position {
    pub(crate) const fn new_unchecked(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub fn new(row: Coord, col: Coord) -> Result<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Ok(Self::new_unchecked(row, col))
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub const fn row(self) -> Coord {
        self.row
    }

    pub const fn col(self) -> Coord {
        self.col
    }

    /// Moves one cell along `delta`, returning a value only when it remains on the board.
    pub fn step(self, (d_row, d_col): Delta) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// Every position on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..EDGE_LENGTH).flat_map(|row| (0..EDGE_LENGTH).map(move |col| Self::new_unchecked(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.col.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Position::new(7, 7).is_ok());
        assert_eq!(Position::new(8, 0), Err(GameError::InvalidCoords));
        assert_eq!(Position::new(0, 8), Err(GameError::InvalidCoords));
    }

    #[test]
    fn step_stops_at_edges() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step((-1, 0)), None);
        assert_eq!(corner.step((0, -1)), None);
        assert_eq!(corner.step((1, 1)), Some(Position::new(1, 1).unwrap()));

        let far = Position::new(7, 7).unwrap();
        assert_eq!(far.step((1, 0)), None);
        assert_eq!(far.step((0, 1)), None);
    }

    #[test]
    fn directions_are_distinct_unit_steps() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            assert!(DIRECTIONS[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), NUM_CELLS);
        assert_eq!(all[0], Position::new(0, 0).unwrap());
        assert_eq!(all[1], Position::new(0, 1).unwrap());
        assert_eq!(all[8], Position::new(1, 0).unwrap());
        assert_eq!(all[63], Position::new(7, 7).unwrap());
    }

    #[test]
    fn deserialize_rejects_off_board_coordinates() {
        let pos: Position = serde_json::from_str(r#"{"row":7,"col":0}"#).unwrap();
        assert_eq!(pos, Position::new(7, 0).unwrap());

        assert!(serde_json::from_str::<Position>(r#"{"row":9,"col":0}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":8}"#).is_err());
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Position::new(2, 5).unwrap().to_string(), "(2, 5)");
    }
}
