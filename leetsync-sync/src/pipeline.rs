//! Sync pipeline: List → (Fetch → Write)* → Publish.
//!
//! [`SyncPipeline`] owns no I/O of its own; it drives the capability traits
//! it was built with. [`run`] wires the live GraphQL client and `git`.

use leetsync_core::{Slug, Submission, SyncConfig};

use crate::client::{LeetCodeClient, SnippetSource, SubmissionSource};
use crate::error::SyncError;
use crate::publisher::{CommandRunner, ProcessRunner, Publisher};
use crate::writer::{SnippetWriter, WriteResult};

/// Progress notifications, emitted in pipeline order.
#[derive(Debug)]
pub enum SyncEvent<'a> {
    /// The listing returned `count` submissions (never emitted for zero).
    Listed { count: usize },
    /// About to fetch snippets for the `index`-th (0-based) submission.
    Fetching {
        index: usize,
        total: usize,
        submission: &'a Submission,
    },
    /// One snippet was written (or would be, in dry-run mode).
    Saved {
        submission: &'a Submission,
        result: &'a WriteResult,
    },
    /// The submission produced no snippets to write.
    Skipped { submission: &'a Submission },
    /// Stage / commit / push is starting.
    Publishing,
    /// Stage / commit / push finished.
    Published { remote: &'a str, branch: &'a str },
}

/// Summary of a run that got past the listing.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub submissions: usize,
    pub writes: Vec<WriteResult>,
    pub skipped: Vec<Slug>,
    pub published: bool,
}

/// How a run ended, short of a fatal error.
#[derive(Debug)]
pub enum SyncOutcome {
    /// Unknown user or no accepted submissions; nothing written or published.
    NoSubmissions,
    Completed(SyncReport),
}

/// One configured sync run over injected sources.
pub struct SyncPipeline<'a> {
    config: &'a SyncConfig,
    submissions: &'a dyn SubmissionSource,
    snippets: &'a dyn SnippetSource,
    runner: &'a dyn CommandRunner,
    dry_run: bool,
}

impl<'a> SyncPipeline<'a> {
    pub fn new(
        config: &'a SyncConfig,
        submissions: &'a dyn SubmissionSource,
        snippets: &'a dyn SnippetSource,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            submissions,
            snippets,
            runner,
            dry_run: false,
        }
    }

    /// Compute paths and report them without writing or publishing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn should_publish(&self) -> bool {
        self.config.publish.enabled && !self.dry_run
    }

    /// Run the pipeline, reporting progress to `observer`.
    ///
    /// Write and publish failures abort immediately; snippet fetch failures
    /// were already absorbed by the [`SnippetSource`].
    pub fn run(&self, observer: &mut dyn FnMut(SyncEvent<'_>)) -> Result<SyncOutcome, SyncError> {
        let config = self.config;
        tracing::info!(
            "listing up to {} accepted submissions for '{}'",
            config.limit,
            config.username
        );
        let submissions = self
            .submissions
            .recent_accepted(&config.username, config.limit)?;

        if submissions.is_empty() {
            tracing::warn!("no submissions found for '{}'", config.username);
            return Ok(SyncOutcome::NoSubmissions);
        }
        observer(SyncEvent::Listed {
            count: submissions.len(),
        });

        let writer = SnippetWriter::new(&config.save_dir, self.dry_run);
        writer.ensure_root()?;

        let total = submissions.len();
        let mut report = SyncReport {
            submissions: total,
            ..SyncReport::default()
        };

        for (index, submission) in submissions.iter().enumerate() {
            observer(SyncEvent::Fetching {
                index,
                total,
                submission,
            });

            let fetched = self.snippets.snippets(&submission.slug);
            let selected: Vec<_> = config
                .snippet_scope
                .select(submission, fetched)
                .into_iter()
                .filter(|snippet| {
                    let usable = snippet.lang.folder_name().is_some();
                    if !usable {
                        tracing::warn!(
                            "skipping snippet for '{}' with unusable language tag {:?}",
                            submission.slug,
                            snippet.lang.0
                        );
                    }
                    usable
                })
                .collect();
            if selected.is_empty() {
                tracing::debug!("no snippets to write for '{}'", submission.slug);
                observer(SyncEvent::Skipped { submission });
                report.skipped.push(submission.slug.clone());
                continue;
            }

            for snippet in &selected {
                let result = writer.write(
                    &submission.title,
                    &snippet.code,
                    &snippet.lang,
                    submission.timestamp,
                )?;
                observer(SyncEvent::Saved {
                    submission,
                    result: &result,
                });
                report.writes.push(result);
            }
        }

        if self.should_publish() {
            observer(SyncEvent::Publishing);
            Publisher::new(&config.publish).publish(self.runner)?;
            report.published = true;
            observer(SyncEvent::Published {
                remote: &config.publish.remote,
                branch: &config.publish.branch,
            });
        }

        Ok(SyncOutcome::Completed(report))
    }
}

/// Run against the live platform and the real `git` binary.
pub fn run(
    config: &SyncConfig,
    dry_run: bool,
    observer: &mut dyn FnMut(SyncEvent<'_>),
) -> Result<SyncOutcome, SyncError> {
    config.validate()?;
    let client = LeetCodeClient::from_config(config);
    SyncPipeline::new(config, &client, &client, &ProcessRunner)
        .dry_run(dry_run)
        .run(observer)
}
