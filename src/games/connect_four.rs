//! Connect Four on the standard 6×7 board
//!
//! X is the MAX player (human), O is the MIN player (engine). The full game
//! tree is far too large for exhaustive search, so utility doubles as a
//! heuristic: ±1,000,000 sentinels mark true wins, and non-terminal states
//! score by window counting. The heuristic's magnitude stays strictly inside
//! the sentinels, so a depth-limited engine can never mistake a strong
//! position for a decided game.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::{Game, Side};

use super::board::{format_grid, Cell, Square};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Exact-outcome sentinel: `+WIN_SENTINEL` for an X win, `-WIN_SENTINEL`
/// for an O win.
pub const WIN_SENTINEL: i32 = 1_000_000;

/// Column preference for move generation: center-out ordering makes
/// alpha-beta pruning bite earlier.
const PREFERRED_COLUMNS: [usize; COLUMNS] = [3, 2, 4, 1, 5, 0, 6];

/// The four window directions: right, down, down-right, down-left
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Connect Four game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFour {
    cells: Vec<Cell>,
}

impl ConnectFour {
    /// Create an empty board
    pub fn new() -> Self {
        ConnectFour {
            cells: vec![Cell::Empty; ROWS * COLUMNS],
        }
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * COLUMNS + col]
    }

    fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || row >= ROWS as i32 || col < 0 || col >= COLUMNS as i32 {
            None
        } else {
            Some(self.cell(row as usize, col as usize))
        }
    }

    /// Whether the square is occupied by either mark
    pub fn marked(&self, square: Square) -> bool {
        self.cell(square.row, square.col) != Cell::Empty
    }

    /// Resolve a column choice to the square a piece would land on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfBounds`] or [`Error::ColumnFull`].
    pub fn drop_square(&self, column: usize) -> Result<Square> {
        if column >= COLUMNS {
            return Err(Error::ColumnOutOfBounds {
                column,
                max: COLUMNS - 1,
            });
        }
        for row in (0..ROWS).rev() {
            if self.cell(row, column) == Cell::Empty {
                return Ok(Square::new(row, column));
            }
        }
        Err(Error::ColumnFull { column })
    }

    fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    fn is_winning(&self, mark: Cell) -> bool {
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                for (d_row, d_col) in DIRECTIONS {
                    if self.count_consecutive(row as i32, col as i32, d_row, d_col, mark)
                        >= WIN_LENGTH
                    {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn count_consecutive(&self, row: i32, col: i32, d_row: i32, d_col: i32, mark: Cell) -> usize {
        let mut count = 0;
        for i in 0..WIN_LENGTH as i32 {
            match self.cell_at(row + d_row * i, col + d_col * i) {
                Some(cell) if cell == mark => count += 1,
                _ => break,
            }
        }
        count
    }

    /// Positional score for one mark: a bonus per piece in the center
    /// column plus window counts over every 4-cell line (truncated at the
    /// board edge).
    fn evaluate(&self, mark: Cell) -> i32 {
        let mut score = 0;

        for row in 0..ROWS {
            if self.cell(row, COLUMNS / 2) == mark {
                score += 3;
            }
        }

        for row in 0..ROWS {
            for col in 0..COLUMNS {
                for (d_row, d_col) in DIRECTIONS {
                    score += self.evaluate_window(row as i32, col as i32, d_row, d_col, mark);
                }
            }
        }
        score
    }

    fn evaluate_window(&self, row: i32, col: i32, d_row: i32, d_col: i32, mark: Cell) -> i32 {
        let mut own = 0;
        let mut empty = 0;
        let mut opponent = 0;

        for i in 0..WIN_LENGTH as i32 {
            match self.cell_at(row + d_row * i, col + d_col * i) {
                None => break,
                Some(Cell::Empty) => empty += 1,
                Some(cell) if cell == mark => own += 1,
                Some(_) => opponent += 1,
            }
        }

        let mut score = 0;
        if own == 3 && empty == 1 {
            score += 100;
        } else if own == 2 && empty == 2 {
            score += 10;
        }
        if opponent == 3 && empty == 1 {
            score -= 500;
        }
        score
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ConnectFour {
    type Move = Square;

    /// At most one square per column — the lowest empty row — in
    /// center-out column order
    fn remaining_moves(&self) -> Vec<Square> {
        let mut moves = Vec::new();
        for col in PREFERRED_COLUMNS {
            for row in (0..ROWS).rev() {
                if self.cell(row, col) == Cell::Empty {
                    moves.push(Square::new(row, col));
                    break;
                }
            }
        }
        moves
    }

    fn is_terminal(&self) -> bool {
        if self.utility().abs() >= WIN_SENTINEL {
            return true;
        }
        self.occupied_count() == ROWS * COLUMNS
    }

    /// The win sentinel for a decided game, otherwise the heuristic
    /// difference `evaluate(X) - evaluate(O)`
    fn utility(&self) -> i32 {
        if self.is_winning(Cell::X) {
            return WIN_SENTINEL;
        }
        if self.is_winning(Cell::O) {
            return -WIN_SENTINEL;
        }
        self.evaluate(Cell::X) - self.evaluate(Cell::O)
    }

    fn execute(&mut self, mv: Square, side: Side) {
        self.cells[mv.row * COLUMNS + mv.col] = Cell::for_side(side);
    }

    fn undo(&mut self, mv: Square, _side: Side) {
        self.cells[mv.row * COLUMNS + mv.col] = Cell::Empty;
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grid(f, &self.cells, COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_in(game: &mut ConnectFour, column: usize, side: Side) -> Square {
        let square = game.drop_square(column).unwrap();
        game.execute(square, side);
        square
    }

    #[test]
    fn test_new_board() {
        let game = ConnectFour::new();
        assert!(!game.is_terminal());
        assert_eq!(game.utility(), 0);
        assert_eq!(game.remaining_moves().len(), COLUMNS);
    }

    #[test]
    fn test_moves_prefer_center_columns() {
        let game = ConnectFour::new();
        let moves = game.remaining_moves();
        assert_eq!(moves[0], Square::new(ROWS - 1, 3));
        assert_eq!(moves[1], Square::new(ROWS - 1, 2));
        assert_eq!(moves[6], Square::new(ROWS - 1, 6));
    }

    #[test]
    fn test_pieces_stack_in_a_column() {
        let mut game = ConnectFour::new();
        assert_eq!(drop_in(&mut game, 0, Side::Max), Square::new(5, 0));
        assert_eq!(drop_in(&mut game, 0, Side::Min), Square::new(4, 0));
        assert_eq!(drop_in(&mut game, 0, Side::Max), Square::new(3, 0));
    }

    #[test]
    fn test_column_full_and_out_of_bounds() {
        let mut game = ConnectFour::new();
        for i in 0..ROWS {
            let side = if i % 2 == 0 { Side::Max } else { Side::Min };
            drop_in(&mut game, 2, side);
        }

        assert!(matches!(
            game.drop_square(2),
            Err(Error::ColumnFull { column: 2 })
        ));
        assert!(matches!(
            game.drop_square(7),
            Err(Error::ColumnOutOfBounds { column: 7, max: 6 })
        ));
        // A full column contributes no candidate move
        assert_eq!(game.remaining_moves().len(), COLUMNS - 1);
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = ConnectFour::new();
        for col in 0..WIN_LENGTH {
            drop_in(&mut game, col, Side::Max);
        }
        assert_eq!(game.utility(), WIN_SENTINEL);
        assert!(game.is_terminal());
    }

    #[test]
    fn test_vertical_win() {
        let mut game = ConnectFour::new();
        for _ in 0..WIN_LENGTH {
            drop_in(&mut game, 5, Side::Min);
        }
        assert_eq!(game.utility(), -WIN_SENTINEL);
        assert!(game.is_terminal());
    }

    #[test]
    fn test_diagonal_win() {
        // Build a staircase and walk X up it: (5,0), (4,1), (3,2), (2,3)
        let mut game = ConnectFour::new();
        drop_in(&mut game, 0, Side::Max); // X (5,0)
        drop_in(&mut game, 1, Side::Min); // O (5,1)
        drop_in(&mut game, 1, Side::Max); // X (4,1)
        drop_in(&mut game, 2, Side::Min); // O (5,2)
        drop_in(&mut game, 2, Side::Min); // O (4,2)
        drop_in(&mut game, 2, Side::Max); // X (3,2)
        drop_in(&mut game, 3, Side::Min); // O (5,3)
        drop_in(&mut game, 3, Side::Min); // O (4,3)
        drop_in(&mut game, 3, Side::Min); // O (3,3)
        assert!(!game.is_terminal());

        drop_in(&mut game, 3, Side::Max); // X (2,3) completes the diagonal
        assert_eq!(game.utility(), WIN_SENTINEL);
        assert!(game.is_terminal());
    }

    #[test]
    fn test_three_in_a_row_is_not_terminal() {
        let mut game = ConnectFour::new();
        for col in 0..3 {
            drop_in(&mut game, col, Side::Max);
        }
        assert!(!game.is_terminal());
        assert!(game.utility() < WIN_SENTINEL);
        assert!(game.utility() > 0);
    }

    #[test]
    fn test_heuristic_rewards_open_three() {
        let mut game = ConnectFour::new();
        let base = game.utility();
        for col in 0..3 {
            drop_in(&mut game, col, Side::Max);
        }
        // An open three scores at least one +100 window for X
        assert!(game.utility() >= base + 100);
    }

    #[test]
    fn test_execute_undo_restores_state() {
        let mut game = ConnectFour::new();
        drop_in(&mut game, 3, Side::Max);
        drop_in(&mut game, 3, Side::Min);
        let before = game.clone();

        for mv in game.remaining_moves() {
            game.execute(mv, Side::Max);
            game.undo(mv, Side::Max);
            assert_eq!(game, before);

            game.execute(mv, Side::Min);
            game.undo(mv, Side::Min);
            assert_eq!(game, before);
        }
    }
}
