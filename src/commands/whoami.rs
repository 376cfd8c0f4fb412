use crate::config::Config;
use crate::error::Result;
use crate::prompt::Confirm;
use crate::types::UserProfile;
use std::io::Write;
use tracing::debug;

const BLOCK_WIDTH: usize = 45;
const UNKNOWN_LOGIN: &str = "<unknown>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityOutcome {
    /// Go on and list repositories for this login.
    Proceed { login: String },
    /// The user said no at the prompt.
    Declined,
}

pub fn print_account_info<W: Write>(profile: &UserProfile, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(BLOCK_WIDTH))?;
    writeln!(out, " GITHUB ACCOUNT INFO")?;
    writeln!(out, "{}", "=".repeat(BLOCK_WIDTH))?;
    writeln!(
        out,
        "Current User : {}",
        profile.login.as_deref().unwrap_or(UNKNOWN_LOGIN)
    )?;
    match profile.id {
        Some(id) => writeln!(out, "User ID      : {}", id)?,
        None => writeln!(out, "User ID      : -")?,
    }
    writeln!(out, "Name         : {}", profile.name.as_deref().unwrap_or("-"))?;
    writeln!(
        out,
        "Profile URL  : {}",
        profile.html_url.as_deref().unwrap_or("-")
    )?;
    Ok(())
}

/// Print the account block and make sure we are who we expect to be.
///
/// On a mismatch the user is asked once whether to carry on anyway.
pub fn check_identity<W: Write, C: Confirm>(
    profile: &UserProfile,
    config: &Config,
    confirm: &C,
    out: &mut W,
) -> Result<IdentityOutcome> {
    print_account_info(profile, out)?;

    let login = profile.login.as_deref().unwrap_or(UNKNOWN_LOGIN);

    if config.is_expected(profile.login.as_deref()) {
        debug!(login, "Authenticated as expected account");
    } else {
        debug!(login, expected = %config.expected_login, "Authenticated as a different account");

        writeln!(out, "{}", "-".repeat(BLOCK_WIDTH))?;
        writeln!(out, "⚠️  WARNING: You are logged in as '{}'.", login)?;
        writeln!(
            out,
            "    You requested repos for '{}'.",
            config.expected_login
        )?;
        writeln!(out, "    To fix this, run this command in your terminal:")?;
        writeln!(out, "    >> {} auth login", config.program)?;
        writeln!(out, "{}", "-".repeat(BLOCK_WIDTH))?;
        out.flush()?;

        let question = format!(
            "Do you want to list repos for '{}' anyway? (y/n): ",
            login
        );
        if !confirm.confirm(&question)? {
            writeln!(out, "Exiting.")?;
            return Ok(IdentityOutcome::Declined);
        }
    }

    writeln!(out, "{}", "-".repeat(BLOCK_WIDTH))?;
    Ok(IdentityOutcome::Proceed {
        login: login.to_string(),
    })
}
