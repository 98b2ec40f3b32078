use colored::Colorize;
use derive_new::new;

/// Outcome of the branch and last-commit queries for one repository
///
/// Both parts are optional: a failed or empty query simply leaves its part
/// out of the rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct LastCommit {
    branch: Option<String>,
    summary: Option<String>,
}

impl LastCommit {
    pub fn from_queries(branch: anyhow::Result<String>, summary: anyhow::Result<String>) -> Self {
        Self::new(first_line(branch), first_line(summary))
    }
}

// stderr is appended to the payload, so only the first line carries the answer
fn first_line(output: anyhow::Result<String>) -> Option<String> {
    output.ok().and_then(|output| {
        output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
    })
}

impl std::fmt::Display for LastCommit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.summary {
            Some(summary) => write!(f, "{} {}", "Last commit:".bold(), summary)?,
            None => write!(f, "{}", "No commit history".yellow())?,
        }

        if let Some(branch) = &self.branch {
            write!(f, " ({})", branch.cyan())?;
        }

        Ok(())
    }
}
