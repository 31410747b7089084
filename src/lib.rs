//! Adversarial search engine for two-player zero-sum perfect-information games
//!
//! This crate provides:
//! - A small [`search::Game`] contract any game exposes to the engines
//!   (legal moves, reversible move application, terminal test, utility)
//! - Exhaustive minimax search with path reconstruction and shortest-path
//!   tie-breaking ([`search::Minimax`])
//! - Depth-limited alpha-beta search ([`search::AlphaBeta`])
//! - Two concrete games: generalized tic-tac-toe and Connect Four
//! - Interactive console runners for both games

pub mod cli;
pub mod error;
pub mod games;
pub mod search;

pub use error::{Error, Result};
pub use games::{ConnectFour, Square, TicTacToe};
pub use search::{AlphaBeta, Game, Minimax, ScoreMove, Side};
