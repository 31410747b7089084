//! Board primitives shared by the concrete games

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::search::Side;

/// A cell on a grid board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// The mark the given side places: X for MAX (human), O for MIN (engine)
    pub fn for_side(side: Side) -> Cell {
        match side {
            Side::Max => Cell::X,
            Side::Min => Cell::O,
        }
    }
}

/// A board coordinate identifying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Render a grid of cells with column headers, row numbers, and separator
/// lines, the way the console runners print boards.
pub(crate) fn format_grid(f: &mut fmt::Formatter<'_>, cells: &[Cell], cols: usize) -> fmt::Result {
    let rows = cells.len() / cols;

    write!(f, "   ")?;
    for col in 0..cols {
        write!(f, " {col}  ")?;
    }
    writeln!(f)?;

    for row in 0..rows {
        write!(f, " {row} ")?;
        for col in 0..cols {
            write!(f, " {} ", cells[row * cols + col].to_char())?;
            if col < cols - 1 {
                write!(f, "|")?;
            }
        }
        writeln!(f)?;
        if row < rows - 1 {
            write!(f, "   ")?;
            for col in 0..cols {
                write!(f, "---")?;
                if col < cols - 1 {
                    write!(f, "+")?;
                }
            }
            writeln!(f)?;
        }
    }
    Ok(())
}
