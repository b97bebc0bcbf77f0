//! `leetsync sync` — fetch, write, commit and push.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use leetsync_core::SnippetScope;
use leetsync_sync::{
    pipeline::{self, SyncEvent},
    SyncOutcome, SyncReport, WriteResult,
};

use super::ConfigArgs;

/// Arguments for `leetsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Keep only the snippet in the language each problem was solved in.
    #[arg(long, conflicts_with = "all_languages")]
    pub submitted_only: bool,

    /// Keep every language's snippet (the default unless the config says otherwise).
    #[arg(long)]
    pub all_languages: bool,

    /// Write files but skip the git stage/commit/push.
    #[arg(long)]
    pub no_publish: bool,

    /// Show what would be written without writing files or publishing.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let mut config = self.config.resolve()?;
        if self.submitted_only {
            config.snippet_scope = SnippetScope::Submitted;
        } else if self.all_languages {
            config.snippet_scope = SnippetScope::All;
        }
        if self.no_publish {
            config.publish.enabled = false;
        }

        let prefix = if self.dry_run { "[dry-run] " } else { "" };
        println!(
            "{prefix}Fetching accepted submissions for user: {}",
            config.username.bold()
        );

        let scope = config.snippet_scope;
        let outcome = pipeline::run(&config, self.dry_run, &mut |event| {
            print_event(prefix, scope, event)
        })
            .with_context(|| format!("sync failed for '{}'", config.username))?;

        match outcome {
            SyncOutcome::NoSubmissions => {
                println!("{}", "✗ No submissions found or invalid username.".red());
            }
            SyncOutcome::Completed(report) => print_summary(prefix, &report),
        }
        Ok(())
    }
}

fn print_event(prefix: &str, scope: SnippetScope, event: SyncEvent<'_>) {
    match event {
        SyncEvent::Listed { count } => {
            println!("{prefix}Found {count} accepted submissions");
        }
        SyncEvent::Fetching {
            index,
            total,
            submission,
        } => {
            let line = format!("[{}/{}] {}", index + 1, total, submission.title);
            println!("{prefix}{}", line.bright_black());
        }
        SyncEvent::Saved { result, .. } => match result {
            WriteResult::Written { path } => {
                println!("{prefix}  {} Saved: {}", "✓".green(), path.display())
            }
            WriteResult::WouldWrite { path } => {
                println!("{prefix}  ~ Would save: {}", path.display())
            }
        },
        SyncEvent::Skipped { submission } => {
            let reason = match scope {
                SnippetScope::Submitted => format!("no code for language {}", submission.lang),
                SnippetScope::All => "no snippets returned".to_string(),
            };
            println!(
                "{prefix}  {} Skipped: {} ({reason})",
                "✗".yellow(),
                submission.title
            );
        }
        SyncEvent::Publishing => {
            println!("\nCommitting and pushing...");
        }
        SyncEvent::Published { remote, branch } => {
            println!("{} Pushed to {remote}/{branch}.", "✓".green());
        }
    }
}

fn print_summary(prefix: &str, report: &SyncReport) {
    println!(
        "{prefix}✓ {} submissions processed ({} files {}, {} skipped)",
        report.submissions,
        report.writes.len(),
        if prefix.is_empty() { "written" } else { "would be written" },
        report.skipped.len()
    );
    if !report.published && prefix.is_empty() {
        println!("Publishing disabled; changes were not committed.");
    }
}
