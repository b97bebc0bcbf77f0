//! # leetsync-sync
//!
//! Fetch-and-write pipeline for accepted LeetCode solutions.
//!
//! Call [`pipeline::run`] for a live run, or build a [`SyncPipeline`] over
//! your own [`SubmissionSource`], [`SnippetSource`] and [`CommandRunner`].

pub mod client;
pub mod error;
pub mod pacing;
pub mod pipeline;
pub mod publisher;
pub mod writer;

pub use client::{LeetCodeClient, SnippetSource, SubmissionSource};
pub use error::SyncError;
pub use pacing::{FixedDelay, NoPacing, Pacer};
pub use pipeline::{SyncEvent, SyncOutcome, SyncPipeline, SyncReport};
pub use publisher::{CommandRunner, CommandStatus, ProcessRunner, PublishStep, Publisher};
pub use writer::{extension_for, sanitize_filename, SnippetWriter, WriteResult};
