//! Interactive game commands

pub mod connect_four;
pub mod tictactoe;
