//! Reading and validating human moves from the console

use std::io::{self, Write};

use anyhow::{bail, Context, Result};

use crate::games::connect_four::COLUMNS;
use crate::games::{ConnectFour, Square, TicTacToe};

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line)
}

/// Prompt until the human enters an in-bounds, unoccupied square as
/// `row col`.
pub fn read_square(game: &TicTacToe) -> Result<Square> {
    loop {
        let line = prompt_line("Your turn: enter row & column separated by space: ")?;
        let mut parts = line.split_whitespace();
        let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
            println!("Please enter two numbers, e.g. `0 2`.");
            continue;
        };
        let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
            println!("Please enter two numbers, e.g. `0 2`.");
            continue;
        };
        match game.try_square(row, col) {
            Ok(square) => return Ok(square),
            Err(err) => println!("Invalid position ({err}), please try again."),
        }
    }
}

/// Prompt until the human enters a column with room; returns the landing
/// square.
pub fn read_column(game: &ConnectFour) -> Result<Square> {
    let prompt = format!("Your turn: enter a column (0-{}): ", COLUMNS - 1);
    loop {
        let line = prompt_line(&prompt)?;
        let Ok(column) = line.trim().parse::<usize>() else {
            println!("Please enter a valid column.");
            continue;
        };
        match game.drop_square(column) {
            Ok(square) => return Ok(square),
            Err(err) => println!("{err}. Try another."),
        }
    }
}
