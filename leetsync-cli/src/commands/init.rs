//! `leetsync init --username <name> [...]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use leetsync_core::{config, SnippetScope, SyncConfig};

/// Write `~/.leetsync/config.yaml`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// LeetCode username whose accepted submissions are synced.
    #[arg(long, short = 'u')]
    pub username: String,

    /// Output root directory for solution files.
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Maximum number of recent accepted submissions to request.
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Keep only the snippet in the language each problem was solved in.
    #[arg(long)]
    pub submitted_only: bool,

    /// Git repository to commit and push from.
    #[arg(long, value_name = "DIR")]
    pub repo_dir: Option<PathBuf>,

    /// Remote to push to.
    #[arg(long)]
    pub remote: Option<String>,

    /// Branch to push to.
    #[arg(long)]
    pub branch: Option<String>,

    /// Never stage, commit or push.
    #[arg(long)]
    pub no_publish: bool,

    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let config = self.build();

        let path = config::save_at(&home, &config, self.force)
            .with_context(|| format!("failed to write config for '{}'", config.username))?;

        println!("✓ Configured sync for '{}'", config.username);
        println!("  Saved to: {}", path.display());
        println!(
            "  Output: {} (limit {}, {} snippets)",
            config.save_dir.display(),
            config.limit,
            config.snippet_scope
        );
        Ok(())
    }

    fn build(&self) -> SyncConfig {
        let mut config = SyncConfig::new(self.username.clone());
        if let Some(save_dir) = &self.save_dir {
            config.save_dir = save_dir.clone();
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if self.submitted_only {
            config.snippet_scope = SnippetScope::Submitted;
        }
        if let Some(repo_dir) = &self.repo_dir {
            config.publish.repo_dir = repo_dir.clone();
        }
        if let Some(remote) = &self.remote {
            config.publish.remote = remote.clone();
        }
        if let Some(branch) = &self.branch {
            config.publish.branch = branch.clone();
        }
        config.publish.enabled = !self.no_publish;
        config
    }
}
