//! Settings types
//!
//! This module defines the data structures that represent a subcmd.yml file.

use crate::output::Output;
use serde::{Deserialize, Serialize};

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Program help text shown in the usage summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stream that help and usage text is written to
    #[serde(default)]
    pub output: OutputTarget,

    /// Log filter, e.g. "debug" or "subcmd=trace"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

/// Named output stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
}

impl From<OutputTarget> for Output {
    fn from(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stderr => Output::Stderr,
            OutputTarget::Stdout => Output::Stdout,
        }
    }
}
