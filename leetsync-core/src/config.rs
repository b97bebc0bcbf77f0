//! Sync configuration stored as YAML.
//!
//! # Storage layout
//!
//! ```text
//! ~/.leetsync/
//!   config.yaml   (mode 0600)
//! ```
//!
//! # API pattern
//!
//! Every function that touches the filesystem has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{io_err, ConfigError};
use crate::types::SnippetScope;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";
pub const DEFAULT_SAVE_DIR: &str = "LeetCodeSolutions";
pub const DEFAULT_LIMIT: u32 = 1000;
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 500;
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update LeetCode solutions";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Everything one sync run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Whose accepted submissions are queried.
    pub username: String,

    /// Output root; relative paths resolve against the working directory.
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,

    /// Upper bound on recent accepted submissions requested.
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Pause after every snippet fetch.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    #[serde(default)]
    pub snippet_scope: SnippetScope,

    #[serde(default)]
    pub publish: PublishConfig,
}

/// Where and how the stage/commit/push sequence runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    pub enabled: bool,
    /// Working directory for `git`.
    pub repo_dir: PathBuf,
    pub remote: String,
    pub branch: String,
    pub message: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            repo_dir: PathBuf::from("."),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

fn default_save_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_DIR)
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_delay_ms() -> u64 {
    DEFAULT_REQUEST_DELAY_MS
}

impl SyncConfig {
    /// A config for `username` with every other field at its default.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            save_dir: default_save_dir(),
            limit: DEFAULT_LIMIT,
            endpoint: default_endpoint(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            snippet_scope: SnippetScope::default(),
            publish: PublishConfig::default(),
        }
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::Invalid("username must not be empty".to_string()));
        }
        if self.limit == 0 {
            return Err(ConfigError::Invalid("limit must be greater than 0".to_string()));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint '{}' must be an http(s) URL",
                self.endpoint
            )));
        }
        if self.publish.enabled {
            for (field, value) in [
                ("publish.remote", &self.publish.remote),
                ("publish.branch", &self.publish.branch),
                ("publish.message", &self.publish.message),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!("{field} must not be empty")));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// `<home>/.leetsync/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".leetsync").join("config.yaml")
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Load and validate `<home>/.leetsync/config.yaml`.
///
/// Returns `ConfigError::NotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed YAML.
pub fn load_at(home: &Path) -> Result<SyncConfig, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Err(ConfigError::NotFound { path });
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    let config: SyncConfig =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })?;
    config.validate()?;
    Ok(config)
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<SyncConfig, ConfigError> {
    load_at(&home()?)
}

/// Like [`load_at`], but a missing file yields `Ok(None)`.
pub fn load_optional_at(home: &Path) -> Result<Option<SyncConfig>, ConfigError> {
    match load_at(home) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// `load_optional_at` convenience wrapper.
pub fn load_optional() -> Result<Option<SyncConfig>, ConfigError> {
    load_optional_at(&home()?)
}

/// Write the config via `.tmp` + rename. Refuses to overwrite unless `force`.
pub fn save_at(home: &Path, config: &SyncConfig, force: bool) -> Result<PathBuf, ConfigError> {
    config.validate()?;

    let path = config_path_at(home);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists { path });
    }

    let dir = home.join(".leetsync");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
        set_dir_permissions(&dir)?;
    }

    let tmp_path = path.with_file_name("config.yaml.tmp");
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&tmp_path, yaml).map_err(|e| io_err(&tmp_path, e))?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path).map_err(|e| io_err(&path, e))?;
    Ok(path)
}

/// `save_at` convenience wrapper.
pub fn save(config: &SyncConfig, force: bool) -> Result<PathBuf, ConfigError> {
    save_at(&home()?, config, force)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn new_fills_defaults() {
        let config = SyncConfig::new("alice");
        assert_eq!(config.save_dir, PathBuf::from("LeetCodeSolutions"));
        assert_eq!(config.limit, 1000);
        assert_eq!(config.request_delay(), Duration::from_millis(500));
        assert_eq!(config.snippet_scope, SnippetScope::All);
        assert_eq!(config.publish.remote, "origin");
        assert_eq!(config.publish.branch, "main");
        assert!(config.publish.enabled);
    }

    #[test]
    fn validate_rejects_zero_limit() {
        let mut config = SyncConfig::new("alice");
        config.limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn validate_rejects_blank_username() {
        let err = SyncConfig::new("   ").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn validate_ignores_publish_fields_when_disabled() {
        let mut config = SyncConfig::new("alice");
        config.publish.enabled = false;
        config.publish.branch = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let home = TempDir::new().unwrap();
        let mut config = SyncConfig::new("alice");
        config.limit = 20;
        config.snippet_scope = SnippetScope::Submitted;
        save_at(home.path(), &config, false).expect("save");

        let loaded = load_at(home.path()).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_refuses_overwrite_without_force() {
        let home = TempDir::new().unwrap();
        let config = SyncConfig::new("alice");
        save_at(home.path(), &config, false).expect("first save");

        let err = save_at(home.path(), &config, false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        save_at(home.path(), &config, true).expect("forced save");
    }

    #[test]
    fn load_optional_missing_is_none() {
        let home = TempDir::new().unwrap();
        assert!(load_optional_at(home.path()).unwrap().is_none());
    }

    #[test]
    fn home_not_found_error_message() {
        assert!(ConfigError::HomeNotFound.to_string().contains("home directory"));
    }
}
