//! subcmd - subcommand dispatch for command-line programs
//!
//! A [`Commander`] holds a set of named [`Command`]s. Given a program's
//! arguments it parses global flags, selects the command named by the first
//! remaining argument, parses that command's own flags and runs it. Usage and
//! help text are rendered consistently whenever the user asks for help or
//! makes a mistake.

// Public modules
pub mod cli;
pub mod commander;
pub mod config;
pub mod error;
pub mod flag;
pub mod logging;
pub mod output;
pub mod text;

// Re-export commonly used types
pub use commander::{Command, Commander, Context, HelpCommand, Program};
pub use error::{FlagError, Result, SubError};
pub use flag::{FlagSet, FlagValue, Slot};
pub use output::{Output, SharedBuffer};

/// Current version of subcmd
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
