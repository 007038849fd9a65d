//! tidytab CLI: argument parsing, logging setup, and subcommand wiring.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
