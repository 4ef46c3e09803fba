use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The cell is not legal for the player to move; nothing changed.
    Rejected,
    Placed,
    /// The move was applied and the player now to move has no legal cell.
    GameOver,
}

/// Board, side to move, and the availability grid that belongs to both.
///
/// Deserializing ignores any stored grid and recomputes it for `next`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "SavedGame")]
pub struct GameState {
    board: Board,
    availability: AvailabilityGrid,
    next: Player,
    move_count: u32,
}

#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    next: Player,
    move_count: u32,
}

impl From<SavedGame> for GameState {
    fn from(saved: SavedGame) -> Self {
        Self {
            move_count: saved.move_count,
            ..Self::from_board(saved.board, saved.next)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Player::default())
    }

    pub fn from_board(board: Board, next: Player) -> Self {
        let availability = board.availability(next);
        Self {
            board,
            availability,
            next,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn availability(&self) -> &AvailabilityGrid {
        &self.availability
    }

    pub fn next(&self) -> Player {
        self.next
    }

    pub fn prev(&self) -> Player {
        !self.next
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// True when the player to move has no legal cell.
    pub fn is_terminal(&self) -> bool {
        self.availability.is_terminal()
    }

    /// Plays `pos` for the player to move if the current availability allows it.
    pub fn place(&mut self, pos: Position) -> PlaceOutcome {
        let placement = self.availability.get(pos);
        if !placement.is_legal() {
            log::debug!("{} cannot place at {}", self.next, pos);
            return PlaceOutcome::Rejected;
        }

        log::debug!(
            "{} places at {}, flipping {}",
            self.next,
            pos,
            placement.flips().len()
        );
        self.board.apply_move(pos, self.next, placement.flips());
        self.next = !self.next;
        self.availability = self.board.availability(self.next);
        self.move_count += 1;

        if self.availability.is_terminal() {
            log::info!(
                "{} has no legal move after {} moves",
                self.next,
                self.move_count
            );
            PlaceOutcome::GameOver
        } else {
            PlaceOutcome::Placed
        }
    }
}
