//! Game state management for the tic-tac-toe GUI

use crate::board::Player;
use crate::engine::Engine;
use crate::rules::{GameStatus, WinningLine};
use crate::search::SearchOutcome;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs computer
    PvE { human: Player },
    /// Player vs player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::X }
    }
}

/// Main game state
pub struct GameState {
    pub engine: Engine,
    pub mode: GameMode,
    pub current_turn: Player,
    pub outcome: Option<GameStatus>,
    pub last_move: Option<usize>,
    pub move_count: usize,
    pub last_search: Option<SearchOutcome>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            engine: Engine::new(),
            mode,
            current_turn: Player::X,
            outcome: None,
            last_move: None,
            move_count: 0,
            last_search: None,
            message: None,
        }
    }

    /// Start a fresh round in the current mode
    pub fn reset(&mut self) {
        self.engine.reset();
        self.current_turn = Player::X;
        self.outcome = None;
        self.last_move = None;
        self.move_count = 0;
        self.last_search = None;
        self.message = None;
    }

    /// Check if the side to move is controlled by a human
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if the side to move is controlled by the computer
    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Attempt to play the human's mark into the given slot
    pub fn try_play(&mut self, slot: usize) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.engine.is_valid_slot(slot) {
            return Err("Slot is already taken".to_string());
        }

        self.apply_move(slot);
        Ok(())
    }

    /// Compute and play the computer's reply.
    ///
    /// The full-depth search over a 3x3 board finishes in well under a
    /// frame, so the reply runs synchronously on the UI thread.
    pub fn computer_reply(&mut self) {
        if !self.is_computer_turn() || self.outcome.is_some() {
            return;
        }

        let outcome = self.engine.respond(self.current_turn);
        self.last_search = Some(outcome);

        if let Some(slot) = outcome.slot {
            self.apply_move(slot);
        } else {
            self.message = Some("No move available".to_string());
        }
    }

    /// Execute a move (for both human and computer)
    fn apply_move(&mut self, slot: usize) {
        let player = self.current_turn;

        match self.engine.play(slot, player) {
            Ok(status) => {
                self.last_move = Some(slot);
                self.move_count += 1;
                self.message = None;

                if status.is_over() {
                    self.outcome = Some(status);
                } else {
                    self.current_turn = player.opponent();
                }
            }
            Err(err) => {
                // try_play validates first, so this only fires for
                // out-of-band callers
                self.message = Some(err.to_string());
            }
        }
    }

    /// The completed line when the game ended in a win
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            Some(GameStatus::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// The winner when the game ended in a win
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameStatus::Won { winner, .. }) => Some(winner),
            _ => None,
        }
    }

    /// Whether the game ended with a full board and no winner
    pub fn is_tie(&self) -> bool {
        matches!(self.outcome, Some(GameStatus::Tie))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_and_computer_turns() {
        let state = GameState::new(GameMode::PvE { human: Player::X });
        assert!(state.is_human_turn());
        assert!(!state.is_computer_turn());

        let state = GameState::new(GameMode::PvE { human: Player::O });
        assert!(!state.is_human_turn());
        assert!(state.is_computer_turn());

        let state = GameState::new(GameMode::PvP);
        assert!(state.is_human_turn());
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn test_try_play_then_reply() {
        let mut state = GameState::new(GameMode::PvE { human: Player::X });
        state.try_play(4).unwrap();
        assert_eq!(state.current_turn, Player::O);

        state.computer_reply();
        assert_eq!(state.current_turn, Player::X);
        assert_eq!(state.move_count, 2);
        assert!(state.last_search.is_some());
    }

    #[test]
    fn test_try_play_rejects_taken_slot() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_play(4).unwrap();
        assert!(state.try_play(4).is_err());
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn test_try_play_rejects_after_game_over() {
        let mut state = GameState::new(GameMode::PvP);
        for slot in [0, 3, 1, 4] {
            state.try_play(slot).unwrap();
        }
        state.try_play(2).unwrap(); // X completes the top row
        assert!(state.outcome.is_some());
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(state.winning_line(), Some([0, 1, 2]));

        assert!(state.try_play(5).is_err());
    }

    #[test]
    fn test_reset_starts_fresh_round() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_play(0).unwrap();
        state.reset();

        assert_eq!(state.move_count, 0);
        assert_eq!(state.current_turn, Player::X);
        assert!(state.outcome.is_none());
        assert!(state.engine.board().is_board_empty());
    }

    #[test]
    fn test_self_play_always_ties() {
        // Both seats on the engine: a perfect player cannot be beaten
        let mut state = GameState::new(GameMode::PvE { human: Player::X });
        while state.outcome.is_none() {
            if state.is_human_turn() {
                let slot = state.engine.best_move(state.current_turn).unwrap();
                state.try_play(slot).unwrap();
            } else {
                state.computer_reply();
            }
        }
        assert!(state.is_tie());
    }
}
