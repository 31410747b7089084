//! Concrete games playable through the search engines

pub mod board;
pub mod connect_four;
pub mod tictactoe;

pub use board::{Cell, Square};
pub use connect_four::ConnectFour;
pub use tictactoe::TicTacToe;
