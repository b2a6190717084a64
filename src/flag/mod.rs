//! Flag parsing
//!
//! Flags are written `-name`, `--name`, `-name=value` or `-name value`.
//! Parsing stops at the first argument that is not a flag, which is what
//! lets the commander split global flags from the subcommand name.

pub mod set;
pub mod usage;
pub mod value;

// Re-export main types
pub use set::FlagSet;
pub use value::{FlagValue, Slot};
