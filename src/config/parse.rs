//! Settings file parsing and discovery

use crate::config::types::Settings;
use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file names to search for
const SETTINGS_FILE_NAMES: &[&str] = &["subcmd.yml", "subcmd.yaml"];

/// Find the settings file by searching the current and parent directories,
/// then the user's configuration directory
pub fn find_settings_file() -> ConfigResult<PathBuf> {
    let cwd = env::current_dir()?;
    match find_settings_file_from(cwd) {
        Ok(path) => Ok(path),
        Err(ConfigError::NotFound(searched)) => match user_settings_file() {
            Some(path) if path.is_file() => Ok(path),
            _ => Err(ConfigError::NotFound(searched)),
        },
        Err(e) => Err(e),
    }
}

/// Find the settings file starting from a specific directory
pub fn find_settings_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in SETTINGS_FILE_NAMES {
            let path = current_dir.join(file_name);
            searched_paths.push(path.display().to_string());

            if path.is_file() {
                return Ok(path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Per-user settings location, e.g. `~/.config/subcmd/subcmd.yml`
pub fn user_settings_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "subcmd").map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAMES[0]))
}

/// Parse a settings file from a path
pub fn parse_settings_file(path: &Path) -> ConfigResult<Settings> {
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loaded settings file");
    parse_settings(&contents)
}

/// Parse settings from a YAML string. An empty document yields the defaults.
pub fn parse_settings(yaml: &str) -> ConfigResult<Settings> {
    if yaml.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Find and parse settings, falling back to defaults when there is no file
pub fn load_settings() -> ConfigResult<Settings> {
    match find_settings_file() {
        Ok(path) => parse_settings_file(&path),
        Err(ConfigError::NotFound(_)) => Ok(Settings::default()),
        Err(e) => Err(e),
    }
}
