//! Exhaustive minimax search
//!
//! Explores the full game tree with no pruning and no depth limit, so every
//! value it backs up is exact. Only meaningful for games small enough that
//! full-depth search terminates in acceptable time.

use crate::error::{Error, Result};

use super::game::{Game, Side};
use super::score::ScoreMove;

/// Exhaustive minimax engine.
///
/// Borrows the game state mutably for the duration of one search and
/// explores it through strictly nested execute/undo pairs. Ties between
/// equal-scoring candidates are broken toward the strictly shorter path:
/// among equal-value outcomes, finish the game sooner.
pub struct Minimax<'g, G: Game> {
    game: &'g mut G,
}

impl<'g, G: Game> Minimax<'g, G> {
    pub fn new(game: &'g mut G) -> Self {
        Minimax { game }
    }

    /// Find the best move for the engine (MIN) in the current state.
    ///
    /// Roots the search at [`Minimax::minimize`]: the engine acts at the
    /// root in this variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the computed best path is empty,
    /// which happens only when searching from an already-terminal state or
    /// when the game reports no candidates.
    pub fn search(&mut self) -> Result<G::Move> {
        self.minimize().first_move().ok_or(Error::NoValidMoves)
    }

    /// MAX node: back up the candidate with the greatest score.
    pub fn maximize(&mut self) -> ScoreMove<G::Move> {
        if self.game.is_terminal() {
            return ScoreMove::leaf(self.game.utility());
        }

        let mut best = ScoreMove::leaf(i32::MIN);
        for mv in self.game.remaining_moves() {
            self.game.execute(mv, Side::Max);
            let child = self.minimize();
            self.game.undo(mv, Side::Max);

            // On equal scores, prefer the candidate that reaches the outcome
            // in strictly fewer plies.
            if child.score > best.score
                || (child.score == best.score && child.path.len() + 1 < best.path.len())
            {
                best = ScoreMove::through(mv, &child);
            }
        }
        best
    }

    /// MIN node: back up the candidate with the smallest score.
    pub fn minimize(&mut self) -> ScoreMove<G::Move> {
        if self.game.is_terminal() {
            return ScoreMove::leaf(self.game.utility());
        }

        let mut best = ScoreMove::leaf(i32::MAX);
        for mv in self.game.remaining_moves() {
            self.game.execute(mv, Side::Min);
            let child = self.maximize();
            self.game.undo(mv, Side::Min);

            if child.score < best.score
                || (child.score == best.score && child.path.len() + 1 < best.path.len())
            {
                best = ScoreMove::through(mv, &child);
            }
        }
        best
    }
}
