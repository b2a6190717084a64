//! The `subcmd` binary
//!
//! A small program built on [`Commander`](crate::Commander): global `-v` and
//! `-config` flags plus `echo`, `env` and `help` commands.

pub mod app;
pub mod commands;

// Re-export main types
pub use app::*;
pub use commands::*;
