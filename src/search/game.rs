//! The capability contract games expose to the search engines

use std::fmt;

use serde::{Deserialize, Serialize};

/// The side making a move: MAX maximizes the utility value, MIN minimizes it.
///
/// By convention MAX is the human player and MIN is the engine, fixed for the
/// whole system. The side is threaded explicitly through every recursive call
/// and every `execute`/`undo`; the engines never consult a global turn flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// A two-player zero-sum perfect-information game, as seen by the engines.
///
/// The engines hold no game state of their own: they borrow an implementation
/// of this trait mutably and explore the tree by applying a move, recursing,
/// and undoing it before trying the next candidate. Implementations must
/// guarantee that `undo` immediately following `execute` with the same move
/// and side restores the state exactly, and that execute/undo pairs nest
/// strictly (LIFO) — the engines rely on this to search without copying the
/// board.
pub trait Game {
    /// A legal action in the game. Opaque to the engines beyond equality.
    type Move: Copy + Eq + fmt::Debug;

    /// All legal moves in the current state.
    ///
    /// The sequence must be finite and duplicate-free. Order matters: the
    /// exhaustive engine breaks ties toward earlier candidates, and the
    /// alpha-beta engine prunes more when strong candidates come first, so
    /// implementations may order moves by positional preference. Returning
    /// an empty sequence while [`Game::is_terminal`] is false is a contract
    /// violation; it surfaces as [`crate::Error::NoValidMoves`] at the
    /// search entry points.
    fn remaining_moves(&self) -> Vec<Self::Move>;

    /// Whether the state is a win for either side or a draw (no moves left).
    ///
    /// Must be consistent with [`Game::utility`].
    fn is_terminal(&self) -> bool;

    /// Evaluation of the current state.
    ///
    /// At terminal states this is exact: the game's win sentinel for a MAX
    /// win, the negated sentinel for a MIN win, zero for a draw. At
    /// non-terminal states (reached when the depth limit cuts the search
    /// off) it is a heuristic estimate whose magnitude must stay strictly
    /// inside the sentinels — the engines do not distinguish heuristic from
    /// exact values.
    fn utility(&self) -> i32;

    /// Apply `mv` for the given side, mutating the state in place.
    fn execute(&mut self, mv: Self::Move, side: Side);

    /// Exact inverse of the most recent matching `execute`.
    fn undo(&mut self, mv: Self::Move, side: Side);
}
