//! Adversarial search for two-player zero-sum perfect-information games
//!
//! Two engines share the same recursive shape:
//! - [`Minimax`]: exhaustive search, exact values, shortest-path tie-breaking
//! - [`AlphaBeta`]: branch-and-bound pruning with a depth limit, falling back
//!   to the game's heuristic evaluation at cutoffs
//!
//! Both engines borrow the game state mutably for the duration of one search
//! call and explore the tree through the reversible execute/undo protocol of
//! the [`Game`] trait, so no board copies are ever made.

pub mod alpha_beta;
pub mod game;
pub mod minimax;
pub mod score;

pub use alpha_beta::AlphaBeta;
pub use game::{Game, Side};
pub use minimax::Minimax;
pub use score::ScoreMove;
