//! Depth-limited minimax search with alpha-beta pruning
//!
//! Same recursive shape as the exhaustive engine, parameterized by an
//! `(alpha, beta)` window and a remaining-depth counter. When the depth
//! limit cuts the search off at a non-terminal state the game's utility is
//! a heuristic estimate; the engine intentionally treats it exactly like a
//! terminal value. Pruning never changes the backed-up score, only the
//! amount of work done.

use crate::error::{Error, Result};

use super::game::{Game, Side};
use super::score::ScoreMove;

/// Depth-limited alpha-beta engine.
///
/// A caller wanting a time bound must impose it through the depth limit;
/// there is no cancellation mechanism inside a search.
pub struct AlphaBeta<'g, G: Game> {
    game: &'g mut G,
}

impl<'g, G: Game> AlphaBeta<'g, G> {
    pub fn new(game: &'g mut G) -> Self {
        AlphaBeta { game }
    }

    /// Find the best first move from the current state, searching at most
    /// `depth_limit` plies ahead.
    ///
    /// `root` names the player framed as choosing at the root. The two
    /// historical runner conventions differ here — the console runners root
    /// the search at [`Side::Max`] even though the engine plays MIN, while
    /// the exhaustive variant roots at MIN — so the root player is an
    /// explicit parameter rather than a baked-in convention.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the computed best path is empty:
    /// the state is already terminal, the game reported no candidates, or
    /// `depth_limit` is zero.
    pub fn search(&mut self, root: Side, depth_limit: u32) -> Result<G::Move> {
        let best = match root {
            Side::Max => self.maximize(i32::MIN, i32::MAX, depth_limit),
            Side::Min => self.minimize(i32::MIN, i32::MAX, depth_limit),
        };
        best.first_move().ok_or(Error::NoValidMoves)
    }

    /// MAX node: back up the greatest child score, tightening `alpha`.
    pub fn maximize(&mut self, mut alpha: i32, beta: i32, depth: u32) -> ScoreMove<G::Move> {
        if self.game.is_terminal() || depth == 0 {
            return ScoreMove::leaf(self.game.utility());
        }

        let mut best = ScoreMove::leaf(i32::MIN);
        for mv in self.game.remaining_moves() {
            self.game.execute(mv, Side::Max);
            let child = self.minimize(alpha, beta, depth - 1);
            self.game.undo(mv, Side::Max);

            if child.score > best.score {
                best = ScoreMove::through(mv, &child);
            }
            alpha = alpha.max(best.score);
            if alpha >= beta {
                // Beta cutoff: the remaining siblings cannot improve the
                // result within the current window.
                break;
            }
        }
        best
    }

    /// MIN node: back up the smallest child score, tightening `beta`.
    pub fn minimize(&mut self, alpha: i32, mut beta: i32, depth: u32) -> ScoreMove<G::Move> {
        if self.game.is_terminal() || depth == 0 {
            return ScoreMove::leaf(self.game.utility());
        }

        let mut best = ScoreMove::leaf(i32::MAX);
        for mv in self.game.remaining_moves() {
            self.game.execute(mv, Side::Min);
            let child = self.maximize(alpha, beta, depth - 1);
            self.game.undo(mv, Side::Min);

            if child.score < best.score {
                best = ScoreMove::through(mv, &child);
            }
            beta = beta.min(best.score);
            if alpha >= beta {
                // Alpha cutoff
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Square, TicTacToe};

    fn place(game: &mut TicTacToe, side: Side, squares: &[(usize, usize)]) {
        for &(row, col) in squares {
            game.execute(Square::new(row, col), side);
        }
    }

    #[test]
    fn test_depth_zero_fails_with_no_valid_moves() {
        let mut game = TicTacToe::new(3);
        let result = AlphaBeta::new(&mut game).search(Side::Max, 0);
        assert!(matches!(result, Err(Error::NoValidMoves)));
    }

    #[test]
    fn test_terminal_root_fails_with_no_valid_moves() {
        let mut game = TicTacToe::new(3);
        place(&mut game, Side::Max, &[(0, 0), (0, 1), (0, 2)]);
        place(&mut game, Side::Min, &[(1, 0), (1, 1)]);

        let result = AlphaBeta::new(&mut game).search(Side::Min, 9);
        assert!(matches!(result, Err(Error::NoValidMoves)));
    }

    #[test]
    fn test_max_root_takes_winning_square() {
        // X X .
        // . O .
        // . . O
        let mut game = TicTacToe::new(3);
        place(&mut game, Side::Max, &[(0, 0), (0, 1)]);
        place(&mut game, Side::Min, &[(1, 1), (2, 2)]);

        let mv = AlphaBeta::new(&mut game).search(Side::Max, 9).unwrap();
        assert_eq!(mv, Square::new(0, 2));
    }

    #[test]
    fn test_min_root_blocks_winning_square() {
        // X X .
        // . O .
        // . . .
        let mut game = TicTacToe::new(3);
        place(&mut game, Side::Max, &[(0, 0), (0, 1)]);
        place(&mut game, Side::Min, &[(1, 1)]);

        let mv = AlphaBeta::new(&mut game).search(Side::Min, 9).unwrap();
        assert_eq!(mv, Square::new(0, 2));
    }

    #[test]
    fn test_both_root_framings_agree_on_forced_block() {
        // The runners frame the engine's turn as a MAX-rooted search and
        // then play the returned move as MIN. On a board with a single
        // immediate threat both framings land on the same square.
        let mut game = TicTacToe::new(3);
        place(&mut game, Side::Max, &[(0, 0), (0, 1)]);
        place(&mut game, Side::Min, &[(1, 1)]);

        let as_max = AlphaBeta::new(&mut game).search(Side::Max, 9).unwrap();
        let as_min = AlphaBeta::new(&mut game).search(Side::Min, 9).unwrap();
        assert_eq!(as_max, Square::new(0, 2));
        assert_eq!(as_min, Square::new(0, 2));
    }

    #[test]
    fn test_search_undoes_every_probe() {
        let mut game = TicTacToe::new(3);
        place(&mut game, Side::Max, &[(0, 0), (1, 1)]);
        place(&mut game, Side::Min, &[(2, 2)]);
        let before = game.clone();

        let _ = AlphaBeta::new(&mut game).search(Side::Max, 6).unwrap();
        assert_eq!(game, before);
    }
}
