//! leetsync core library — domain types, configuration persistence, errors.
//!
//! - [`types`] — submissions, snippets and their newtypes
//! - [`config`] — [`SyncConfig`] load / save / validate
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{PublishConfig, SyncConfig};
pub use error::ConfigError;
pub use types::{CodeSnippet, LangTag, Slug, SnippetScope, Submission};
