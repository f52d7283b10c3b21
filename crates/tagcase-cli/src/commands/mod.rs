//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_conventions;
pub mod output;
