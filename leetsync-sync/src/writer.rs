//! Snippet writer.
//!
//! ## Layout
//!
//! ```text
//! <save_dir>/
//!   <lang lowercased>/
//!     <sanitized title>.<ext>
//! ```
//!
//! Each file is the header line `// Synced on YYYY-MM-DD HH:MM:SS UTC`
//! followed by the raw snippet code. Existing files are replaced wholesale:
//! content goes to `<path>.leetsync.tmp` first and is renamed into place.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use leetsync_core::LangTag;

use crate::error::{io_err, SyncError};

/// Extension used for any language tag not in [`extension_for`]'s table.
pub const FALLBACK_EXTENSION: &str = "txt";

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (created or overwritten).
    Written { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Keep alphanumerics, space, `-` and `_`; every other char becomes `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File extension for a language tag, case-insensitive.
pub fn extension_for(lang: &LangTag) -> &'static str {
    match lang.0.to_lowercase().as_str() {
        "cpp" | "c++" => "cpp",
        "c" => "c",
        "java" => "java",
        "python" | "python3" => "py",
        "csharp" | "c#" => "cs",
        "javascript" => "js",
        "typescript" => "ts",
        "php" => "php",
        "swift" => "swift",
        "kotlin" => "kt",
        "dart" => "dart",
        "golang" | "go" => "go",
        "ruby" => "rb",
        "scala" => "scala",
        "rust" => "rs",
        "racket" => "rkt",
        "erlang" => "erl",
        "elixir" => "ex",
        "mysql" | "mssql" | "oraclesql" | "postgresql" => "sql",
        "bash" => "sh",
        _ => FALLBACK_EXTENSION,
    }
}

/// `// Synced on 2023-11-14 22:13:20 UTC`
pub fn header_line(synced: DateTime<Utc>) -> String {
    format!("// Synced on {} UTC", synced.format("%Y-%m-%d %H:%M:%S"))
}

// ---------------------------------------------------------------------------
// SnippetWriter
// ---------------------------------------------------------------------------

/// Writes snippets under a fixed output root.
#[derive(Debug, Clone)]
pub struct SnippetWriter {
    save_dir: PathBuf,
    dry_run: bool,
}

impl SnippetWriter {
    pub fn new(save_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            save_dir: save_dir.into(),
            dry_run,
        }
    }

    /// `<save_dir>/<lang lowercased>/<sanitized title>.<ext>`. Pure, no I/O.
    ///
    /// Fails with [`SyncError::InvalidLanguage`] when the tag would not stay
    /// one folder below `save_dir` (see [`LangTag::folder_name`]).
    pub fn target_path(&self, title: &str, lang: &LangTag) -> Result<PathBuf, SyncError> {
        let folder = lang
            .folder_name()
            .ok_or_else(|| SyncError::InvalidLanguage {
                title: title.to_string(),
                lang: lang.0.clone(),
            })?;
        Ok(self.save_dir.join(folder).join(format!(
            "{}.{}",
            sanitize_filename(title),
            extension_for(lang)
        )))
    }

    /// Create the output root if absent. No-op in dry-run mode.
    pub fn ensure_root(&self) -> Result<(), SyncError> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::create_dir_all(&self.save_dir).map_err(|e| io_err(&self.save_dir, e))
    }

    /// Write one snippet, replacing whatever was at the target path.
    pub fn write(
        &self,
        title: &str,
        code: &str,
        lang: &LangTag,
        timestamp: i64,
    ) -> Result<WriteResult, SyncError> {
        let synced = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            SyncError::InvalidTimestamp {
                title: title.to_string(),
                timestamp,
            }
        })?;
        let path = self.target_path(title, lang)?;

        if self.dry_run {
            tracing::info!("[dry-run] would write: {}", path.display());
            return Ok(WriteResult::WouldWrite { path });
        }

        let content = format!("{}\n{}", header_line(synced), code);
        let tmp = PathBuf::from(format!("{}.leetsync.tmp", path.display()));
        write_replacing(&path, &content, &tmp)?;

        tracing::info!("wrote: {}", path.display());
        Ok(WriteResult::Written { path })
    }
}

fn write_replacing(path: &Path, content: &str, tmp: &Path) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Err(e) = std::fs::write(tmp, content) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(tmp, e));
    }
    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
