//! Settings validation

use crate::config::types::Settings;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Validate parsed settings
pub fn validate_settings(settings: &Settings) -> ConfigResult<()> {
    if let Some(log) = &settings.log {
        validate_log_filter(log)?;
    }
    Ok(())
}

/// Check that `filter` is a valid log filter directive
fn validate_log_filter(filter: &str) -> ConfigResult<()> {
    EnvFilter::try_new(filter)
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(format!("Invalid log filter '{}': {}", filter, e)))
}
