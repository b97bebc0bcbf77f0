//! Error types for leetsync-sync.

use std::path::PathBuf;

use thiserror::Error;

use leetsync_core::ConfigError;

/// All fatal errors a sync run can end with.
///
/// Per-problem snippet fetch failures never surface here; the fetcher
/// recovers from them locally.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from configuration loading or validation.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The submission listing query could not be completed.
    #[error("failed to list submissions for '{username}': {reason}")]
    Listing { username: String, reason: String },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A submission timestamp that cannot be rendered as a UTC date.
    #[error("timestamp {timestamp} for '{title}' is out of range")]
    InvalidTimestamp { title: String, timestamp: i64 },

    /// A language tag that cannot be used as a single folder name.
    #[error("language tag {lang:?} for '{title}' is not a usable folder name")]
    InvalidLanguage { title: String, lang: String },

    /// One of the stage / commit / push steps exited unsuccessfully.
    #[error("publish step `{step}` failed: {detail}")]
    Publish { step: String, detail: String },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
