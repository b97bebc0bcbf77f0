//! Subcommand implementations and the config flags they share.

pub mod init;
pub mod list;
pub mod sync;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use leetsync_core::{config, SyncConfig};

/// Per-run overrides layered on top of `~/.leetsync/config.yaml`.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// LeetCode username whose accepted submissions are synced.
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Output root directory for solution files.
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Maximum number of recent accepted submissions to request.
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// GraphQL endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Pause after each snippet request, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub request_delay_ms: Option<u64>,
}

impl ConfigArgs {
    /// Load the config file (if any) and apply the overrides.
    ///
    /// Without a config file, `--username` alone is enough; every other
    /// field takes its default.
    pub fn resolve(&self) -> Result<SyncConfig> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let loaded = config::load_optional_at(&home).context("failed to load config")?;

        let mut config = match (loaded, &self.username) {
            (Some(config), _) => config,
            (None, Some(username)) => SyncConfig::new(username.clone()),
            (None, None) => bail!(
                "no config found at {}; run `leetsync init --username <name>` or pass --username",
                config::config_path_at(&home).display()
            ),
        };
        self.apply(&mut config);
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    fn apply(&self, config: &mut SyncConfig) {
        if let Some(username) = &self.username {
            config.username = username.clone();
        }
        if let Some(save_dir) = &self.save_dir {
            config.save_dir = save_dir.clone();
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(delay) = self.request_delay_ms {
            config.request_delay_ms = delay;
        }
    }
}
