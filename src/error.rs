//! Error types for talking to the `gh` client.

use std::io::{self, Write};
use thiserror::Error;

/// Everything that can end a run early. All of these are fatal.
#[derive(Debug, Error)]
pub enum Error {
    /// The client binary is not installed or not on `PATH`.
    #[error("The '{program}' command was not found.")]
    ExecutableNotFound { program: String },

    /// The client ran but exited with a failure status.
    #[error("Error running command: {command}\n    Details: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The client succeeded but its stdout did not decode.
    #[error("Unexpected output from command: {command}\n    Details: {source}")]
    MalformedOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Write the `[!]` diagnostic shown before the process exits.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Error::CommandFailed { .. } => writeln!(out, "\n[!] {}", self)?,
            _ => writeln!(out, "\n[!] Error: {}", self)?,
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_shows_command_and_details() {
        let err = Error::CommandFailed {
            command: "gh api user".to_string(),
            stderr: "not authenticated".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gh api user"));
        assert!(msg.contains("Details: not authenticated"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn not_found_names_program() {
        let err = Error::ExecutableNotFound {
            program: "gh".to_string(),
        };
        assert_eq!(err.to_string(), "The 'gh' command was not found.");
        assert_ne!(err.exit_code(), 0);

        let mut out = Vec::new();
        err.report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n[!] Error: The 'gh' command was not found.\n"
        );
    }

    #[test]
    fn command_failed_report_layout() {
        let err = Error::CommandFailed {
            command: "gh api user".to_string(),
            stderr: "not authenticated".to_string(),
        };
        let mut out = Vec::new();
        err.report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n[!] Error running command: gh api user\n    Details: not authenticated\n"
        );
    }
}
