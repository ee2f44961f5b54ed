//! # prefs-cli
//!
//! Library half of the `playerprefs` tool: configuration, path resolution,
//! and the subcommands.  `main.rs` only parses arguments, sets up logging,
//! and prints.

pub mod commands;
pub mod config;
pub mod locate;
