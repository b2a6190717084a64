//! Error types for subcmd

use crate::text::quote;
use std::io;
use thiserror::Error;

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, SubError>;

/// Main error type returned by [`Commander::run`](crate::Commander::run)
#[derive(Error, Debug)]
pub enum SubError {
    /// Help was requested, or the arguments did not name a usable command.
    /// Usage text has already been written to the output sink.
    #[error("help requested")]
    Help,

    /// Global or subcommand flags could not be parsed
    #[error(transparent)]
    Flag(FlagError),

    /// The selected command failed
    #[error(transparent)]
    Command(anyhow::Error),

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SubError {
    /// Wrap an error returned by a command's `run`.
    ///
    /// A bare `SubError` is unwrapped, so a command such as `help` can still
    /// signal [`SubError::Help`]. Anything with context attached is kept
    /// whole as [`SubError::Command`].
    pub fn from_command(err: anyhow::Error) -> Self {
        let outermost: &(dyn std::error::Error + Send + Sync + 'static) = err.as_ref();
        if !outermost.is::<SubError>() {
            return SubError::Command(err);
        }
        match err.downcast::<SubError>() {
            Ok(sub) => sub,
            Err(err) => SubError::Command(err),
        }
    }

    /// Whether this is the help-requested sentinel
    pub fn is_help(&self) -> bool {
        matches!(self, SubError::Help)
    }

    /// Conventional process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SubError::Help | SubError::Flag(_) => 2,
            SubError::Command(_) | SubError::Io(_) => 1,
        }
    }
}

impl From<FlagError> for SubError {
    fn from(err: FlagError) -> Self {
        match err {
            FlagError::Help => SubError::Help,
            other => SubError::Flag(other),
        }
    }
}

/// Flag parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    #[error("flag: help requested")]
    Help,

    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    #[error("flag provided but not defined: -{0}")]
    Undefined(String),

    #[error("flag needs an argument: -{0}")]
    MissingValue(String),

    #[error("invalid boolean value {} for -{name}: {reason}", quote(.value))]
    InvalidBool {
        name: String,
        value: String,
        reason: String,
    },

    #[error("invalid value {} for flag -{name}: {reason}", quote(.value))]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find settings file (searched: {0})")]
    NotFound(String),

    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors from the `subcmd` binary
#[derive(Error, Debug)]
pub enum CliError {
    /// Dispatch failed
    #[error(transparent)]
    Sub(#[from] SubError),

    /// The settings file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Whether usage text has already explained the problem to the user
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Sub(SubError::Help | SubError::Flag(_)))
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sub(err) => err.exit_code(),
            CliError::Config(_) => 1,
        }
    }
}

/// Specialized result type for flag parsing
pub type FlagResult<T> = std::result::Result<T, FlagError>;

/// Specialized result type for settings operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
