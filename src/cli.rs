//! Console runners for playing the bundled games against the engine
//!
//! The search core never logs or prints; every piece of user-visible I/O —
//! turn alternation, prompting, board rendering, outcome announcements —
//! lives in this layer.

pub mod commands;
pub mod input;
pub mod output;
