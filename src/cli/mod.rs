// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, CloseArgs, Commands, ConnectArgs};
pub use handlers::{handle_close, handle_connect};
