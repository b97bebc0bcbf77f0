//! Domain types for accepted submissions and their code snippets.
//!
//! These are the clean, platform-agnostic shapes; the GraphQL wire format
//! lives in `leetsync-sync` and converts into these.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// URL-safe problem identifier (e.g. `two-sum`), stable across requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(pub String);

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Language tag as reported by the platform (`cpp`, `Python3`, `C++`, ...).
///
/// Casing is preserved; comparisons between submission and snippet tags go
/// through [`LangTag::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LangTag(pub String);

impl LangTag {
    /// Case-insensitive tag equality.
    pub fn matches(&self, other: &LangTag) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Lowercased tag, used as the per-language folder name.
    ///
    /// `None` when the tag cannot stay a single folder under the output
    /// root: empty, `.`/`..`, or containing a path separator or NUL.
    pub fn folder_name(&self) -> Option<String> {
        let name = self.0.trim().to_lowercase();
        if name.is_empty() || name == "." || name == ".." {
            return None;
        }
        if name.contains(['/', '\\', '\0']) {
            return None;
        }
        Some(name)
    }
}

impl fmt::Display for LangTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for LangTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LangTag {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One accepted solution, as listed by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub title: String,
    pub slug: Slug,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub lang: LangTag,
}

impl Submission {
    /// Submission time in UTC, or `None` if the timestamp is out of range.
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Starter/template code the platform stores for a problem in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub lang: LangTag,
    pub code: String,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which of a problem's snippets get persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SnippetScope {
    /// Every language the platform returns.
    #[default]
    All,
    /// Only the snippet matching the submission's own language.
    Submitted,
}

impl SnippetScope {
    /// Apply the scope to the snippets fetched for `submission`.
    pub fn select(self, submission: &Submission, snippets: Vec<CodeSnippet>) -> Vec<CodeSnippet> {
        match self {
            SnippetScope::All => snippets,
            SnippetScope::Submitted => snippets
                .into_iter()
                .filter(|s| s.lang.matches(&submission.lang))
                .take(1)
                .collect(),
        }
    }
}

impl fmt::Display for SnippetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetScope::All => write!(f, "all"),
            SnippetScope::Submitted => write!(f, "submitted"),
        }
    }
}
