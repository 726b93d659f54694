//! Search module for the tic-tac-toe engine
//!
//! Contains the exhaustive minimax search with alpha-beta pruning.
//! The 3x3 game tree is small enough (at most 9 plies) that every
//! search runs to terminal positions on the calling thread.

pub mod minimax;

pub use minimax::{SearchOutcome, Searcher, LOSS_SCORE, TIE_SCORE, WIN_SCORE};
