//! Configuration constants and settings

use serde::Deserialize;
use std::path::{Path, PathBuf};

// Service configuration
//
// The server is an external HTTP JSON service; everything about it is
// configurable, nothing about it is assumed beyond the three endpoints.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const SERVER_ENV_VAR: &str = "ROSTER_SERVER";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Message area configuration
pub const MESSAGE_HIDE_SECS: u64 = 5;

// User-facing fallback strings
pub const ACTIVITIES_LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVE_REJECTED_FALLBACK: &str = "Failed to remove participant";
pub const REMOVE_FAILED: &str = "Failed to remove participant. Please try again.";

// Display formatting constants
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 60;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 57;

/// Optional on-disk configuration (`<config_dir>/activity-roster/config.toml`)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Path of the config file, if a config directory exists on this platform
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("activity-roster").join("config.toml"))
}

/// Loads the config file, treating a missing file as empty configuration
///
/// A malformed file is reported on the diagnostic channel and ignored rather
/// than aborting the command.
pub fn load_file_config() -> FileConfig {
    let Some(path) = config_file_path() else {
        return FileConfig::default();
    };
    read_file_config(&path)
}

fn read_file_config(path: &Path) -> FileConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return FileConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            FileConfig::default()
        }
    }
}

/// Determines the server base URL
///
/// Priority order:
/// 1. --server flag → as given
/// 2. ROSTER_SERVER env var
/// 3. server_url in the config file
/// 4. Default → http://localhost:8000
pub fn get_server_url(flag: Option<&str>) -> String {
    resolve_server_url(
        flag,
        std::env::var(SERVER_ENV_VAR).ok().as_deref(),
        &load_file_config(),
    )
}

fn resolve_server_url(flag: Option<&str>, env: Option<&str>, file: &FileConfig) -> String {
    let url = flag
        .map(str::to_string)
        .or_else(|| env.filter(|v| !v.is_empty()).map(str::to_string))
        .or_else(|| file.server_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// Determines the request timeout, same priority order as the server URL
pub fn get_timeout_secs(flag: Option<u64>) -> u64 {
    flag.or(load_file_config().timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
