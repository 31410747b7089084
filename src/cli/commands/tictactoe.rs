//! Tic-tac-toe runner: human plays X (MAX), the engine plays O (MIN)

use anyhow::Result;
use clap::Parser;

use crate::cli::{input, output};
use crate::games::TicTacToe;
use crate::search::{AlphaBeta, Game, Minimax, Side};

#[derive(Parser, Debug)]
#[command(about = "Play generalized tic-tac-toe against the engine")]
pub struct TicTacToeArgs {
    /// Board side length (e.g. 3 for a 3x3 board)
    #[arg(long, short = 's', default_value_t = 3)]
    pub size: usize,

    /// Search depth limit for the alpha-beta engine
    #[arg(long, short = 'd', default_value_t = 50)]
    pub depth: u32,

    /// Use the exhaustive engine instead of alpha-beta (small boards only)
    #[arg(long)]
    pub exhaustive: bool,

    /// Let the engine make the first move
    #[arg(long)]
    pub ai_first: bool,
}

pub fn execute(args: TicTacToeArgs) -> Result<()> {
    let mut game = TicTacToe::new(args.size);
    let mut turn = if args.ai_first { Side::Min } else { Side::Max };

    while !game.is_terminal() {
        println!("{game}");
        match turn {
            Side::Max => {
                let mv = input::read_square(&game)?;
                game.execute(mv, Side::Max);
            }
            Side::Min => {
                println!("Engine's turn:");
                let spinner = output::thinking_spinner();
                let mv = if args.exhaustive {
                    Minimax::new(&mut game).search()?
                } else {
                    // The pruned search is rooted at MAX and the returned
                    // move is played as MIN, matching the historical runner
                    // convention.
                    AlphaBeta::new(&mut game).search(Side::Max, args.depth)?
                };
                spinner.finish_and_clear();
                println!("Engine plays {mv}");
                game.execute(mv, Side::Min);
            }
        }
        turn = turn.opponent();
    }

    println!("{game}");
    output::announce_winner(game.utility(), 1);
    Ok(())
}
