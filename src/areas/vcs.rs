//! Version-control tool access
//!
//! Every process the report spawns goes through the `Vcs` trait. The
//! production implementation, `GitCli`, runs the git executable in an
//! explicit working directory, so the process-wide current directory is
//! never touched. Tests swap in a fake implementation.

use crate::artifacts::core::debug_log;
use crate::artifacts::status::query::VcsQuery;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use std::process::Command;

/// Answers report queries for a given working directory
pub trait Vcs {
    /// Run `query` inside `working_dir`
    ///
    /// # Returns
    ///
    /// The command's stdout with its stderr appended on success; an error
    /// if the tool could not be started or exited unsuccessfully.
    fn run_query(&self, query: VcsQuery, working_dir: &Path) -> anyhow::Result<String>;
}

/// `Vcs` backed by the git command line
#[derive(Debug, Clone, new)]
pub struct GitCli {
    /// Executable name or path, typically `git`
    executable: String,
}

impl Vcs for GitCli {
    fn run_query(&self, query: VcsQuery, working_dir: &Path) -> anyhow::Result<String> {
        debug_log!(
            "running {} {:?} in {}",
            self.executable,
            query.args(),
            working_dir.display()
        );

        let output = Command::new(&self.executable)
            .args(query.args())
            .current_dir(working_dir)
            .output()
            .with_context(|| format!("failed to run {} for the {} query", self.executable, query))?;

        let mut payload = String::from_utf8_lossy(&output.stdout).into_owned();
        payload.push_str(&String::from_utf8_lossy(&output.stderr));

        debug_log!("{} query exited with {}", query, output.status);

        if !output.status.success() {
            anyhow::bail!(
                "{} query failed ({}): {}",
                query,
                output.status,
                payload.trim()
            );
        }

        Ok(payload)
    }
}
