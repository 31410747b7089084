//! Connect Four runner: human plays X (MAX), the engine plays O (MIN)

use anyhow::Result;
use clap::Parser;

use crate::cli::{input, output};
use crate::games::connect_four::WIN_SENTINEL;
use crate::games::ConnectFour;
use crate::search::{AlphaBeta, Game, Side};

#[derive(Parser, Debug)]
#[command(about = "Play Connect Four against the engine")]
pub struct ConnectFourArgs {
    /// Search depth limit for the alpha-beta engine
    #[arg(long, short = 'd', default_value_t = 8)]
    pub depth: u32,

    /// Let the engine make the first move
    #[arg(long)]
    pub ai_first: bool,
}

pub fn execute(args: ConnectFourArgs) -> Result<()> {
    let mut game = ConnectFour::new();
    let mut turn = if args.ai_first { Side::Min } else { Side::Max };

    while !game.is_terminal() {
        println!("{game}");
        match turn {
            Side::Max => {
                let mv = input::read_column(&game)?;
                game.execute(mv, Side::Max);
            }
            Side::Min => {
                println!("Engine's turn:");
                let spinner = output::thinking_spinner();
                // MAX-rooted search played as MIN, matching the historical
                // runner convention.
                let mv = AlphaBeta::new(&mut game).search(Side::Max, args.depth)?;
                spinner.finish_and_clear();
                println!("Engine plays column {}", mv.col);
                game.execute(mv, Side::Min);
            }
        }
        turn = turn.opponent();
    }

    println!("{game}");
    output::announce_winner(game.utility(), WIN_SENTINEL);
    Ok(())
}
