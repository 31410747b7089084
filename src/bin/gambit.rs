//! Gambit CLI - play the bundled games against the search engine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gambit")]
#[command(version, about = "Play tic-tac-toe or Connect Four against a minimax engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play generalized tic-tac-toe
    Tictactoe(gambit::cli::commands::tictactoe::TicTacToeArgs),

    /// Play Connect Four
    ConnectFour(gambit::cli::commands::connect_four::ConnectFourArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tictactoe(args) => gambit::cli::commands::tictactoe::execute(args),
        Commands::ConnectFour(args) => gambit::cli::commands::connect_four::execute(args),
    }
}
