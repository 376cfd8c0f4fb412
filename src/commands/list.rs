use crate::error::Result;
use crate::types::RepositoryRecord;
use std::io::Write;

/// Counts printed under the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub public: usize,
    /// Everything that isn't PUBLIC, internal included.
    pub private: usize,
}

impl Summary {
    pub fn tally(repos: &[RepositoryRecord]) -> Self {
        let public = repos.iter().filter(|r| r.visibility.is_public()).count();
        Summary {
            total: repos.len(),
            public,
            private: repos.len() - public,
        }
    }
}

pub fn header() -> String {
    format!("{:<30} | {:<10} | {}", "NAME", "VISIBILITY", "SSH URL")
}

/// Name is cut at 30 characters so the columns stay aligned.
pub fn format_row(repo: &RepositoryRecord) -> String {
    format!(
        "{:<30.30} | {:<10} | {}",
        repo.name,
        repo.visibility,
        repo.display_url()
    )
}

/// Print the repository table followed by the totals line.
pub fn print_repos<W: Write>(repos: &[RepositoryRecord], out: &mut W) -> Result<Summary> {
    let header = header();
    let rule = "-".repeat(header.len());

    writeln!(out, "{}", header)?;
    writeln!(out, "{}", rule)?;
    for repo in repos {
        writeln!(out, "{}", format_row(repo))?;
    }

    let summary = Summary::tally(repos);
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "Total: {} (Public: {}, Private: {})",
        summary.total, summary.public, summary.private
    )?;
    Ok(summary)
}
