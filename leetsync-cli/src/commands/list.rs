//! `leetsync list` — preview recent accepted submissions.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use leetsync_core::Submission;
use leetsync_sync::{LeetCodeClient, SubmissionSource};

use super::ConfigArgs;

/// Arguments for `leetsync list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SubmissionJson {
    title: String,
    slug: String,
    lang: String,
    timestamp: i64,
    submitted_at: Option<String>,
}

#[derive(Tabled)]
struct SubmissionRow {
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "slug")]
    slug: String,
    #[tabled(rename = "language")]
    lang: String,
    #[tabled(rename = "submitted (UTC)")]
    submitted: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.resolve()?;
        let client = LeetCodeClient::from_config(&config);
        let submissions = client
            .recent_accepted(&config.username, config.limit)
            .with_context(|| format!("failed to list submissions for '{}'", config.username))?;

        if self.json {
            return print_json(&submissions);
        }

        if submissions.is_empty() {
            println!("No submissions found or invalid username.");
            return Ok(());
        }
        print_table(&config.username, &submissions);
        Ok(())
    }
}

fn submitted_label(submission: &Submission) -> Option<String> {
    submission
        .submitted_at()
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn print_json(submissions: &[Submission]) -> Result<()> {
    let payload: Vec<SubmissionJson> = submissions
        .iter()
        .map(|s| SubmissionJson {
            title: s.title.clone(),
            slug: s.slug.0.clone(),
            lang: s.lang.0.clone(),
            timestamp: s.timestamp,
            submitted_at: submitted_label(s),
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize submissions JSON")?
    );
    Ok(())
}

fn print_table(username: &str, submissions: &[Submission]) {
    println!("{} accepted submissions for '{username}'", submissions.len());
    let rows: Vec<SubmissionRow> = submissions
        .iter()
        .map(|s| SubmissionRow {
            title: s.title.clone(),
            slug: s.slug.0.clone(),
            lang: s.lang.0.clone(),
            submitted: submitted_label(s).unwrap_or_else(|| "unknown".to_string()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
