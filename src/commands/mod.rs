pub mod list;
pub mod whoami;

pub use list::{print_repos, Summary};
pub use whoami::{check_identity, IdentityOutcome};

use crate::config::Config;
use crate::error::Result;
use crate::gh::{CommandRunner, GhClient};
use crate::prompt::Confirm;
use std::io::Write;
use tracing::info;

/// How a run ended without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed { login: String, summary: Summary },
    /// Wrong account and the user chose not to continue.
    Declined,
}

/// Check the logged-in account, then print its repositories.
pub fn run<R, C, W>(config: &Config, runner: &R, confirm: &C, out: &mut W) -> Result<Outcome>
where
    R: CommandRunner,
    C: Confirm,
    W: Write,
{
    let gh = GhClient::new(runner, &config.program);

    writeln!(out, "Connecting to GitHub CLI...")?;
    let profile = gh.current_user()?;

    let login = match check_identity(&profile, config, confirm, out)? {
        IdentityOutcome::Proceed { login } => login,
        IdentityOutcome::Declined => return Ok(Outcome::Declined),
    };

    writeln!(out, "\nFetching repositories for '{}'...\n", login)?;
    out.flush()?;
    let repos = gh.list_repositories(config.repo_limit)?;

    let summary = print_repos(&repos, out)?;
    info!(
        total = summary.total,
        public = summary.public,
        private = summary.private,
        "Listed repositories"
    );

    Ok(Outcome::Listed { login, summary })
}
