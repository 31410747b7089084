//! Console output helpers for the game runners

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the engine searches
pub fn thinking_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message("Engine is thinking...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Announce the outcome from the final utility value.
///
/// `win_sentinel` is the game's exact-outcome value for a MAX win; a MIN win
/// is its negation and anything in between is a draw.
pub fn announce_winner(utility: i32, win_sentinel: i32) {
    if utility >= win_sentinel {
        println!("\nPlayer (X) wins!");
    } else if utility <= -win_sentinel {
        println!("\nEngine (O) wins!");
    } else {
        println!("\nIt's a draw!");
    }
}
