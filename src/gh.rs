//! Running the GitHub CLI and decoding what it prints.

use crate::error::{Error, Result};
use crate::types::{RepositoryRecord, UserProfile};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io;
use std::process::Command;
use tracing::debug;

/// Runs an external program and returns its stdout parsed as JSON.
pub trait CommandRunner {
    fn run_json(&self, program: &str, args: &[&str]) -> Result<Value>;
}

/// Spawns a real child process and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_json(&self, program: &str, args: &[&str]) -> Result<Value> {
        let command = command_line(program, args);
        debug!(%command, "Running command");

        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::ExecutableNotFound {
                    program: program.to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(%command, status = ?output.status.code(), "Command failed");
            return Err(Error::CommandFailed { command, stderr });
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|source| Error::MalformedOutput { command, source })
    }
}

/// Join a program and its arguments the way a user would type them.
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// The two `gh` calls this tool needs.
pub struct GhClient<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> GhClient<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        GhClient { runner, program }
    }

    /// `gh api user`
    pub fn current_user(&self) -> Result<UserProfile> {
        self.fetch(&["api", "user"])
    }

    /// `gh repo list` for the authenticated account.
    pub fn list_repositories(&self, limit: usize) -> Result<Vec<RepositoryRecord>> {
        let limit = limit.to_string();
        let repos: Vec<RepositoryRecord> = self.fetch(&[
            "repo",
            "list",
            "--limit",
            limit.as_str(),
            "--json",
            "name,visibility,url,sshUrl",
        ])?;
        debug!(count = repos.len(), "Fetched repositories");
        Ok(repos)
    }

    fn fetch<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        let value = self.runner.run_json(self.program, args)?;
        serde_json::from_value(value).map_err(|source| Error::MalformedOutput {
            command: command_line(self.program, args),
            source,
        })
    }
}
