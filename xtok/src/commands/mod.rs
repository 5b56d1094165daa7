//! Command modules for the xtok CLI.

pub mod common;

pub mod init;
pub mod stats;
pub mod tokens;

pub use init::{run_init, InitArgs};
pub use stats::{run_stats, StatsArgs};
pub use tokens::{run_tokens, TokensArgs};
