//! Minimax search with alpha-beta pruning
//!
//! The searcher evaluates every continuation of a position and returns
//! the slot that maximizes the searching player's worst-case outcome.
//! Scores are taken from the maximizing player's point of view:
//! a won terminal position is +10, a lost one -10, a tie 0.
//!
//! Scores are deliberately depth-independent: a win in one move and a
//! win in five score the same. The search always reaches terminal
//! positions, so optimal play is unaffected and no depth weighting is
//! applied.
//!
//! Candidate slots are explored in ascending index order and the best
//! score is updated with strict comparisons, so among equally scored
//! moves the lowest index is kept. Callers can rely on that tie-break.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player};
//! use tictactoe::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let outcome = searcher.search(&board, Player::X);
//! assert!(outcome.slot.is_some());
//! assert_eq!(outcome.score, 0); // perfect play from empty is a tie
//! ```

use tracing::debug;

use crate::board::{Board, Player};
use crate::rules::{classify, GameStatus};

/// Score of a terminal position won by the maximizing player
pub const WIN_SCORE: i32 = 10;
/// Score of a terminal position lost by the maximizing player
pub const LOSS_SCORE: i32 = -10;
/// Score of a tied terminal position
pub const TIE_SCORE: i32 = 0;

/// Sentinel for alpha-beta bounds, outside the true score range
const INF: i32 = 1000;

/// Search result: the chosen slot and associated statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best slot found; `None` only when the position has no open slot
    pub slot: Option<usize>,
    /// Score of the position under perfect play by both sides
    pub score: i32,
    /// Positions visited, terminal evaluations included
    pub nodes: u64,
    /// Branches abandoned by alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Exhaustive minimax searcher.
///
/// Works on a private copy of the caller's board, mutating and
/// restoring one slot per recursion step instead of cloning the board
/// at every node. The copy is discarded when the search returns, so
/// the caller's board is never touched.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best slot for `player` in the given position.
    ///
    /// Convenience wrapper around [`Searcher::search`]. The caller is
    /// expected to check for a terminal position first; on a board with
    /// no open slot this returns `None` rather than panicking.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        self.search(board, player).slot
    }

    /// Full search of the position with `player` to move as maximizer.
    #[must_use]
    pub fn search(&mut self, board: &Board, player: Player) -> SearchOutcome {
        self.nodes = 0;
        self.cutoffs = 0;

        let mut work = board.clone();
        let (slot, score) = self.search_root(&mut work, player);

        let outcome = SearchOutcome {
            slot,
            score,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        };
        debug!(?slot, score, nodes = self.nodes, cutoffs = self.cutoffs, "search complete");
        outcome
    }

    /// Root of the search: like the maximizing branch below, but keeps
    /// the slot that produced the best score. Only the root surfaces a
    /// slot; recursive calls pass scores alone.
    fn search_root(&mut self, board: &mut Board, player: Player) -> (Option<usize>, i32) {
        self.nodes += 1;

        let available = match classify(board) {
            GameStatus::InProgress { available } => available,
            // Terminal position: nothing to choose, report its score
            GameStatus::Won { winner, .. } => {
                let score = if winner == player { WIN_SCORE } else { LOSS_SCORE };
                return (None, score);
            }
            GameStatus::Tie => return (None, TIE_SCORE),
        };

        let mut alpha = -INF;
        let beta = INF;
        let mut best_slot = None;
        let mut best_score = -INF;

        for slot in available {
            board.set(slot, player);
            let score = self.minimax(board, player.opponent(), player, alpha, beta);
            board.clear(slot);

            if score > best_score {
                best_score = score;
                best_slot = Some(slot);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }

        (best_slot, best_score)
    }

    /// Recursive minimax over the shared working board.
    ///
    /// Each candidate slot is marked, searched, and restored to empty
    /// before the next one; the board is exactly as received when the
    /// call returns.
    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Player,
        maximizer: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let available = match classify(board) {
            GameStatus::InProgress { available } => available,
            GameStatus::Won { winner, .. } => {
                return if winner == maximizer { WIN_SCORE } else { LOSS_SCORE };
            }
            GameStatus::Tie => return TIE_SCORE,
        };

        if to_move == maximizer {
            let mut best_score = -INF;
            for slot in available {
                board.set(slot, to_move);
                let score = self.minimax(board, to_move.opponent(), maximizer, alpha, beta);
                board.clear(slot);

                if score > best_score {
                    best_score = score;
                }
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best_score
        } else {
            let mut best_score = INF;
            for slot in available {
                board.set(slot, to_move);
                let score = self.minimax(board, to_move.opponent(), maximizer, alpha, beta);
                board.clear(slot);

                if score < best_score {
                    best_score = score;
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best_score
        }
    }
}
