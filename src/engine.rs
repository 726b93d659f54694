//! Game engine owning the board and enforcing legal play
//!
//! The engine holds the one authoritative board for a game. All
//! mutation goes through [`Engine::play`], which validates the move,
//! applies it, classifies the resulting position, and latches a
//! terminal flag once the game ends. [`Engine::respond`] runs the
//! search over the owned board to produce the computer's reply.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Engine, Player};
//!
//! let mut engine = Engine::new();
//! engine.play(4, Player::X).unwrap();
//!
//! // Computer replies as O
//! if let Some(slot) = engine.best_move(Player::O) {
//!     engine.play(slot, Player::O).unwrap();
//! }
//! ```

use derive_more::{Display, Error};
use tracing::{debug, warn};

use crate::board::{Board, Player};
use crate::rules::{classify, GameStatus};
use crate::search::{SearchOutcome, Searcher};

/// Rejected move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// The game already reached a win or tie; reset before playing on
    #[display("game is already over")]
    GameOver,
    /// Slot index outside the board, or slot already occupied
    #[display("slot {slot} is out of range or already occupied")]
    InvalidSlot { slot: usize },
}

/// Game engine with exclusive ownership of its board.
///
/// The board starts empty and is only ever mutated one validated move
/// at a time; `reset` is the sole way back to the initial state.
#[derive(Debug, Default)]
pub struct Engine {
    board: Board,
    searcher: Searcher,
    over: bool,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the owned board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the game has reached a terminal status
    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Open slots of the owned board, ascending
    pub fn available_slots(&self) -> Vec<usize> {
        self.board.available_slots()
    }

    /// Whether a move into `slot` would be accepted on an ongoing game
    pub fn is_valid_slot(&self, slot: usize) -> bool {
        self.board.is_empty_slot(slot)
    }

    /// Play `player`'s mark into `slot`.
    ///
    /// Validates before mutating: a rejected move leaves the board
    /// exactly as it was. On success the resulting status is returned
    /// and, if it is terminal, further moves are rejected until
    /// [`Engine::reset`].
    pub fn play(&mut self, slot: usize, player: Player) -> Result<GameStatus, PlayError> {
        if self.over {
            warn!(slot, %player, "move rejected: game over");
            return Err(PlayError::GameOver);
        }
        if !self.is_valid_slot(slot) {
            warn!(slot, %player, "move rejected: invalid slot");
            return Err(PlayError::InvalidSlot { slot });
        }

        self.board.set(slot, player);
        let status = classify(&self.board);
        self.over = status.is_over();
        debug!(slot, %player, over = self.over, "move played");
        Ok(status)
    }

    /// Search the owned board for `player`'s best reply.
    ///
    /// Returns the full search outcome; `slot` is `None` only when the
    /// board has no open slot. Callers should check [`Engine::is_over`]
    /// first, as the reply to a finished game is meaningless.
    pub fn respond(&mut self, player: Player) -> SearchOutcome {
        self.searcher.search(&self.board, player)
    }

    /// Best slot for `player` on the owned board
    pub fn best_move(&mut self, player: Player) -> Option<usize> {
        self.respond(player).slot
    }

    /// Clear the board and the terminal flag
    pub fn reset(&mut self) {
        self.board.reset();
        self.over = false;
        debug!("engine reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_engine_is_fresh() {
        let engine = Engine::new();
        assert!(!engine.is_over());
        assert!(engine.board().is_board_empty());
        assert_eq!(engine.available_slots(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_play_marks_exactly_one_cell() {
        let mut engine = Engine::new();
        engine.play(4, Player::X).unwrap();

        for slot in 0..9 {
            let expected = if slot == 4 {
                Cell::Mark(Player::X)
            } else {
                Cell::Empty
            };
            assert_eq!(engine.board().get(slot), expected);
        }
    }

    #[test]
    fn test_play_occupied_slot_rejected() {
        let mut engine = Engine::new();
        engine.play(0, Player::X).unwrap();

        let before = engine.board().clone();
        assert_eq!(
            engine.play(0, Player::O),
            Err(PlayError::InvalidSlot { slot: 0 })
        );
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_play_out_of_range_rejected() {
        let mut engine = Engine::new();
        for slot in [9, 10, usize::MAX] {
            assert_eq!(
                engine.play(slot, Player::X),
                Err(PlayError::InvalidSlot { slot })
            );
        }
        assert!(engine.board().is_board_empty());
    }

    #[test]
    fn test_play_after_win_rejected() {
        let mut engine = Engine::new();
        // X takes the top row; O answers in the middle row
        engine.play(0, Player::X).unwrap();
        engine.play(3, Player::O).unwrap();
        engine.play(1, Player::X).unwrap();
        engine.play(4, Player::O).unwrap();
        let status = engine.play(2, Player::X).unwrap();

        assert_eq!(
            status,
            GameStatus::Won {
                winner: Player::X,
                line: [0, 1, 2]
            }
        );
        assert!(engine.is_over());
        assert_eq!(engine.play(5, Player::O), Err(PlayError::GameOver));
    }

    #[test]
    fn test_reply_completes_top_row() {
        let mut engine = Engine::new();
        engine.play(0, Player::X).unwrap();
        engine.play(4, Player::O).unwrap();
        engine.play(1, Player::X).unwrap();
        engine.play(5, Player::O).unwrap();

        // X completes the top row
        let reply = engine.best_move(Player::X).unwrap();
        assert_eq!(reply, 2);
        let status = engine.play(reply, Player::X).unwrap();
        assert_eq!(
            status,
            GameStatus::Won {
                winner: Player::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_tie_game() {
        let mut engine = Engine::new();
        // X O X / X O O / O X X by alternating play, no line
        let moves = [
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (4, Player::O),
            (3, Player::X),
            (5, Player::O),
            (7, Player::X),
            (6, Player::O),
        ];
        for (slot, player) in moves {
            assert_eq!(engine.play(slot, player).unwrap().is_over(), false);
        }
        let status = engine.play(8, Player::X).unwrap();
        assert_eq!(status, GameStatus::Tie);
        assert!(engine.is_over());
    }

    #[test]
    fn test_reset_clears_terminal_state() {
        let mut engine = Engine::new();
        engine.play(0, Player::X).unwrap();
        engine.play(3, Player::O).unwrap();
        engine.play(1, Player::X).unwrap();
        engine.play(4, Player::O).unwrap();
        engine.play(2, Player::X).unwrap();
        assert!(engine.is_over());

        engine.reset();
        assert!(!engine.is_over());
        assert!(engine.board().is_board_empty());
        engine.play(4, Player::O).unwrap();
    }

    #[test]
    fn test_best_move_only_open_slots() {
        let mut engine = Engine::new();
        engine.play(0, Player::X).unwrap();
        engine.play(4, Player::O).unwrap();

        let slot = engine.best_move(Player::X).unwrap();
        assert!(engine.is_valid_slot(slot));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PlayError::GameOver.to_string(), "game is already over");
        assert_eq!(
            PlayError::InvalidSlot { slot: 12 }.to_string(),
            "slot 12 is out of range or already occupied"
        );
    }
}
