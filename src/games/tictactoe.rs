//! Generalized tic-tac-toe on an N×N board
//!
//! X is the MAX player (human), O is the MIN player (engine). A player wins
//! by filling a complete row, column, or either main diagonal. Utility is
//! exact everywhere: +1 for an X win, -1 for an O win, 0 otherwise — the
//! full tree is small enough that the engines never need a heuristic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::{Game, Side};

use super::board::{format_grid, Cell, Square};

/// Generalized tic-tac-toe game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    size: usize,
    cells: Vec<Cell>,
}

impl TicTacToe {
    /// Create an empty board of the given side length (e.g. 3 for 3×3)
    pub fn new(size: usize) -> Self {
        TicTacToe {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Whether the square is occupied by either mark
    pub fn marked(&self, square: Square) -> bool {
        self.cell(square.row, square.col) != Cell::Empty
    }

    /// Validate a human-chosen coordinate against bounds and occupancy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SquareOutOfBounds`] or [`Error::SquareOccupied`].
    pub fn try_square(&self, row: usize, col: usize) -> Result<Square> {
        if row >= self.size || col >= self.size {
            return Err(Error::SquareOutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let square = Square::new(row, col);
        if self.marked(square) {
            return Err(Error::SquareOccupied { row, col });
        }
        Ok(square)
    }

    /// Sum a line of cells, counting X as +1 and O as -1. A full line for
    /// one player sums to `size` or `-size`.
    fn line_sum(&self, squares: impl Iterator<Item = (usize, usize)>) -> i32 {
        squares
            .map(|(row, col)| match self.cell(row, col) {
                Cell::X => 1,
                Cell::O => -1,
                Cell::Empty => 0,
            })
            .sum()
    }

    fn line_outcome(&self, sum: i32) -> Option<i32> {
        if sum == self.size as i32 {
            Some(1)
        } else if sum == -(self.size as i32) {
            Some(-1)
        } else {
            None
        }
    }

    fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl Game for TicTacToe {
    type Move = Square;

    /// All empty squares, in row-major order
    fn remaining_moves(&self) -> Vec<Square> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if !self.marked(Square::new(row, col)) {
                    moves.push(Square::new(row, col));
                }
            }
        }
        moves
    }

    fn is_terminal(&self) -> bool {
        let utility = self.utility();
        if utility == 1 || utility == -1 {
            return true;
        }
        self.occupied_count() == self.size * self.size
    }

    /// +1 if X has completed a line, -1 if O has, 0 otherwise
    fn utility(&self) -> i32 {
        let n = self.size;

        for row in 0..n {
            let sum = self.line_sum((0..n).map(|col| (row, col)));
            if let Some(outcome) = self.line_outcome(sum) {
                return outcome;
            }
        }

        for col in 0..n {
            let sum = self.line_sum((0..n).map(|row| (row, col)));
            if let Some(outcome) = self.line_outcome(sum) {
                return outcome;
            }
        }

        let sum = self.line_sum((0..n).map(|d| (d, d)));
        if let Some(outcome) = self.line_outcome(sum) {
            return outcome;
        }

        let sum = self.line_sum((0..n).map(|d| (d, n - 1 - d)));
        if let Some(outcome) = self.line_outcome(sum) {
            return outcome;
        }

        0
    }

    fn execute(&mut self, mv: Square, side: Side) {
        let idx = self.index(mv.row, mv.col);
        self.cells[idx] = Cell::for_side(side);
    }

    fn undo(&mut self, mv: Square, _side: Side) {
        let idx = self.index(mv.row, mv.col);
        self.cells[idx] = Cell::Empty;
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grid(f, &self.cells, self.size)
    }
}
