use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Opponent stones that turn over when a stone is placed.
pub type FlipSet = SmallVec<[Position; 8]>;

/// Result of checking one cell for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Placement {
    legal: bool,
    flips: FlipSet,
}

impl Placement {
    pub fn illegal() -> Self {
        Self::default()
    }

    pub const fn is_legal(&self) -> bool {
        self.legal
    }

    pub fn flips(&self) -> &[Position] {
        &self.flips
    }
}

/// Final stone counts of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// The player holding more stones, or `None` for a draw.
    pub fn winner(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            core::cmp::Ordering::Greater => Some(Player::Black),
            core::cmp::Ordering::Less => Some(Player::White),
            core::cmp::Ordering::Equal => None,
        }
    }

    pub const fn total(self) -> usize {
        self.black + self.white
    }
}

/// The 8x8 grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: Array2<Cell>,
}

#[derive(Deserialize)]
struct RawBoard {
    cells: Array2<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        if raw.cells.shape() != GRID_SHAPE {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::default(GRID_SHAPE),
        }
    }

    /// Opening layout: the four center cells, crossed diagonally.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        board[Position::new_unchecked(3, 4)] = Cell::White;
        board[Position::new_unchecked(4, 3)] = Cell::White;
        board[Position::new_unchecked(4, 4)] = Cell::Black;
        board[Position::new_unchecked(3, 3)] = Cell::Black;
        board
    }

    pub fn cell_at(&self, pos: Position) -> Cell {
        self[pos]
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count(Cell::Black),
            white: self.count(Cell::White),
        }
    }

    /// Checks whether `player` may place a stone at `pos` and collects the stones that would flip.
    ///
    /// An occupied cell is never legal. Otherwise every direction is scanned
    /// independently, and a direction counts only if a run of one or more
    /// opponent stones is closed by a stone of `player`.
    pub fn can_place_at(&self, pos: Position, player: Player) -> Placement {
        if !self[pos].is_empty() {
            return Placement::illegal();
        }

        let mut placement = Placement::illegal();
        for delta in DIRECTIONS {
            if let Some(run) = self.capture_run(pos, delta, player) {
                placement.legal = true;
                placement.flips.extend(run);
            }
        }
        placement
    }

    fn capture_run(&self, from: Position, delta: Delta, player: Player) -> Option<FlipSet> {
        let opponent = Cell::from(!player);
        let mut run = FlipSet::new();

        let mut cursor = from.step(delta)?;
        while self[cursor] == opponent {
            run.push(cursor);
            cursor = cursor.step(delta)?;
        }

        (self[cursor] == Cell::from(player) && !run.is_empty()).then_some(run)
    }

    /// Places a stone for `player` and turns over `flips`.
    ///
    /// `flips` must come from [`Board::can_place_at`] on this exact board state.
    pub fn apply_move(&mut self, pos: Position, player: Player, flips: &[Position]) {
        let stone = Cell::from(player);
        self[pos] = stone;
        for &flip in flips {
            self[flip] = stone;
        }
    }

    /// Computes every cell's placement for `player`.
    pub fn availability(&self, player: Player) -> AvailabilityGrid {
        let entries = Array2::from_shape_fn(GRID_SHAPE, |(row, col)| {
            self.can_place_at(Position::new_unchecked(row as Coord, col as Coord), player)
        });
        AvailabilityGrid { player, entries }
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   |")?;
        for col in 0..EDGE_LENGTH {
            write!(f, " {col}")?;
        }
        f.write_str("\n---|----------------\n")?;

        for (row, line) in self.cells.rows().into_iter().enumerate() {
            write!(f, "{row:3}|")?;
            for cell in line {
                write!(f, " {}", cell.symbol())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Parses the `_`/`x`/`o` grid format, one board row per line.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut board = Self::empty();
        let mut rows = s.lines().filter(|line| !line.trim().is_empty());

        for row in 0..EDGE_LENGTH {
            let line = rows.next().ok_or(GameError::InvalidBoardShape)?;
            let mut symbols = line.chars().filter(|c| !c.is_whitespace());
            for col in 0..EDGE_LENGTH {
                let symbol = symbols.next().ok_or(GameError::InvalidBoardShape)?;
                board[Position::new_unchecked(row, col)] =
                    Cell::from_symbol(symbol).ok_or(GameError::InvalidBoardShape)?;
            }
            if symbols.next().is_some() {
                return Err(GameError::InvalidBoardShape);
            }
        }

        if rows.next().is_some() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(board)
    }
}

/// Placement of every cell for one player, computed from a single board state.
///
/// Only ever built by [`Board::availability`], so it is serialized but never deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AvailabilityGrid {
    player: Player,
    entries: Array2<Placement>,
}

impl AvailabilityGrid {
    /// The player the grid was computed for.
    pub const fn player(&self) -> Player {
        self.player
    }

    pub fn get(&self, pos: Position) -> &Placement {
        &self.entries[pos.to_nd_index()]
    }

    /// Legal cells in row-major order.
    pub fn legal_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| self.get(pos).is_legal())
    }

    pub fn legal_count(&self) -> usize {
        self.entries.iter().filter(|p| p.is_legal()).count()
    }

    /// True when the player has no legal cell at all.
    pub fn is_terminal(&self) -> bool {
        !self.entries.iter().any(Placement::is_legal)
    }
}

impl Index<Position> for AvailabilityGrid {
    type Output = Placement;

    fn index(&self, pos: Position) -> &Self::Output {
        self.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn pos(row: Coord, col: Coord) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn sorted(flips: &[Position]) -> Vec<Position> {
        let mut flips = flips.to_vec();
        flips.sort();
        flips
    }

    #[test]
    fn starting_board_has_four_center_stones() {
        let board = Board::starting();

        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.cell_at(pos(3, 3)), Cell::Black);
        assert_eq!(board[pos(4, 4)], Cell::Black);
        assert_eq!(board[pos(3, 4)], Cell::White);
        assert_eq!(board[pos(4, 3)], Cell::White);
        assert_eq!(board.score(), Score { black: 2, white: 2 });
    }

    #[test]
    fn opening_moves_for_black() {
        let availability = Board::starting().availability(Player::Black);
        let legal: Vec<_> = availability.legal_positions().collect();

        assert_eq!(legal, [pos(2, 4), pos(3, 5), pos(4, 2), pos(5, 3)]);
        assert_eq!(availability[pos(2, 4)].flips(), [pos(3, 4)]);
        assert_eq!(availability[pos(3, 5)].flips(), [pos(3, 4)]);
        assert_eq!(availability[pos(4, 2)].flips(), [pos(4, 3)]);
        assert_eq!(availability[pos(5, 3)].flips(), [pos(4, 3)]);
    }

    #[test]
    fn opening_moves_for_white() {
        let availability = Board::starting().availability(Player::White);
        let legal: Vec<_> = availability.legal_positions().collect();

        assert_eq!(legal, [pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]);
        for p in legal {
            assert_eq!(availability[p].flips().len(), 1);
        }
    }

    #[test]
    fn occupied_cells_are_never_legal() {
        let board = board(
            "
            x o _ _ _ _ _ _
            o o _ _ _ _ _ _
            _ _ x _ _ _ _ _
            _ _ _ x o _ _ _
            _ _ _ o x _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            ",
        );

        for p in Position::all().filter(|&p| !board[p].is_empty()) {
            assert_eq!(board.can_place_at(p, Player::Black), Placement::illegal());
            assert_eq!(board.can_place_at(p, Player::White), Placement::illegal());
        }
    }

    #[test]
    fn each_direction_captures_independently() {
        // Black at the center with a white ring closed by black stones in every direction.
        let board = board(
            "
            x _ _ x _ _ x _
            _ o _ o _ o _ _
            _ _ o o o _ _ _
            x o o _ o o x _
            _ _ o o o _ _ _
            _ o _ o _ o _ _
            x _ _ x _ _ x _
            _ _ _ _ _ _ _ _
            ",
        );

        let placement = board.can_place_at(pos(3, 3), Player::Black);

        assert!(placement.is_legal());
        assert_eq!(placement.flips().len(), 16);
        for delta in DIRECTIONS {
            let near = pos(3, 3).step(delta).unwrap();
            assert!(placement.flips().contains(&near));
        }
    }

    #[test]
    fn run_ending_in_empty_or_edge_captures_nothing() {
        let board = board(
            "
            _ o o o o o o o
            _ _ _ _ _ _ _ _
            _ o x _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            ",
        );

        // East run hits the edge without a closing black stone.
        assert!(!board.can_place_at(pos(0, 0), Player::Black).is_legal());
        // Adjacent own stone is not a capture.
        assert!(!board.can_place_at(pos(2, 3), Player::Black).is_legal());
        // A run closed by black is.
        assert_eq!(board.can_place_at(pos(2, 0), Player::Black).flips(), [pos(2, 1)]);
    }

    #[test]
    fn flips_combine_across_directions() {
        let board = board(
            "
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ x _ _ _ _
            _ _ _ o _ _ _ _
            _ x o _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            ",
        );

        let placement = board.can_place_at(pos(4, 3), Player::Black);

        assert!(placement.is_legal());
        assert_eq!(sorted(placement.flips()), [pos(3, 3), pos(4, 2)]);
    }

    #[test]
    fn apply_move_changes_only_target_and_flips() {
        let before = Board::starting();
        let placement = before.can_place_at(pos(2, 4), Player::Black);
        let mut after = before.clone();

        after.apply_move(pos(2, 4), Player::Black, placement.flips());

        for p in Position::all() {
            if p == pos(2, 4) || placement.flips().contains(&p) {
                assert_eq!(after[p], Cell::Black);
            } else {
                assert_eq!(after[p], before[p]);
            }
        }
        assert_eq!(after.occupied_count(), before.occupied_count() + 1);
        assert_eq!(after.score(), Score { black: 4, white: 1 });
    }

    #[test]
    fn terminal_grid_has_no_legal_cell() {
        let board = board(
            "
            x x x _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            _ _ _ _ _ _ _ _
            x o _ _ _ _ _ _
            ",
        );

        let white = board.availability(Player::White);
        let black = board.availability(Player::Black);

        assert!(white.is_terminal());
        assert_eq!(white.legal_count(), 0);
        assert!(!black.is_terminal());
        assert_eq!(black.legal_positions().collect::<Vec<_>>(), [pos(7, 2)]);
    }

    #[test]
    fn winner_follows_counts() {
        assert_eq!(Score { black: 40, white: 24 }.winner(), Some(Player::Black));
        assert_eq!(Score { black: 10, white: 54 }.winner(), Some(Player::White));
        assert_eq!(Score { black: 32, white: 32 }.winner(), None);
    }

    #[test]
    fn displays_console_grid() {
        let text = Board::starting().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "   | 0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "---|----------------");
        assert_eq!(lines[2], "  0| _ _ _ _ _ _ _ _");
        assert_eq!(lines[5], "  3| _ _ _ x o _ _ _");
        assert_eq!(lines[6], "  4| _ _ _ o x _ _ _");
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        assert_eq!("".parse::<Board>(), Err(GameError::InvalidBoardShape));
        assert_eq!("x o _".parse::<Board>(), Err(GameError::InvalidBoardShape));

        let mut too_wide = "_ _ _ _ _ _ _ _ _\n".repeat(8);
        assert_eq!(too_wide.parse::<Board>(), Err(GameError::InvalidBoardShape));
        too_wide = "_ _ _ _ _ _ _ ?\n".repeat(8);
        assert_eq!(too_wide.parse::<Board>(), Err(GameError::InvalidBoardShape));
        let too_tall = "_ _ _ _ _ _ _ _\n".repeat(9);
        assert_eq!(too_tall.parse::<Board>(), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn serializes_with_serde() {
        let board = Board::starting();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn deserialize_rejects_wrong_shape() {
        let small = r#"{"cells":{"v":1,"dim":[2,2],"data":["Empty","Black","White","Empty"]}}"#;
        assert!(serde_json::from_str::<Board>(small).is_err());

        let json = serde_json::to_string(&Board::empty()).unwrap();
        let wide = json.replace("[8,8]", "[4,16]");
        assert_ne!(wide, json);
        assert!(serde_json::from_str::<Board>(&wide).is_err());
    }
}
