//! Stage, commit and push through the `git` CLI.

use std::path::{Path, PathBuf};
use std::process::Command;

use leetsync_core::PublishConfig;

use crate::error::{io_err, SyncError};

/// What a finished external command reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs an external program to completion.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandStatus, SyncError>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandStatus, SyncError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| io_err(program, e))?;

        Ok(CommandStatus {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// One of the three publish steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    Stage,
    Commit,
    Push,
}

impl PublishStep {
    pub fn all() -> [PublishStep; 3] {
        [PublishStep::Stage, PublishStep::Commit, PublishStep::Push]
    }
}

impl std::fmt::Display for PublishStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStep::Stage => write!(f, "stage"),
            PublishStep::Commit => write!(f, "commit"),
            PublishStep::Push => write!(f, "push"),
        }
    }
}

/// The fixed stage → commit → push sequence for one repository.
#[derive(Debug, Clone)]
pub struct Publisher {
    repo_dir: PathBuf,
    remote: String,
    branch: String,
    message: String,
}

impl Publisher {
    pub fn new(config: &PublishConfig) -> Self {
        Self {
            repo_dir: config.repo_dir.clone(),
            remote: config.remote.clone(),
            branch: config.branch.clone(),
            message: config.message.clone(),
        }
    }

    /// `git` arguments for a step.
    pub fn args(&self, step: PublishStep) -> Vec<String> {
        match step {
            PublishStep::Stage => vec!["add".to_string(), ".".to_string()],
            PublishStep::Commit => vec!["commit".to_string(), "-m".to_string(), self.message.clone()],
            PublishStep::Push => vec!["push".to_string(), self.remote.clone(), self.branch.clone()],
        }
    }

    /// Run a single step; a non-zero exit is an error.
    pub fn run_step(&self, runner: &dyn CommandRunner, step: PublishStep) -> Result<(), SyncError> {
        let args = self.args(step);
        tracing::info!("git {}", args.join(" "));

        let status = runner.run("git", &args, &self.repo_dir)?;
        if status.success {
            return Ok(());
        }

        let code = status
            .code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        let output = if status.stderr.is_empty() {
            status.stdout
        } else {
            status.stderr
        };
        Err(SyncError::Publish {
            step: step.to_string(),
            detail: format!("`git {}` exited with {code}: {output}", args.join(" ")),
        })
    }

    /// Run all three steps in order, stopping at the first failure.
    pub fn publish(&self, runner: &dyn CommandRunner) -> Result<(), SyncError> {
        for step in PublishStep::all() {
            self.run_step(runner, step)?;
        }
        Ok(())
    }
}
