//! Submodule declarations (`.gitmodules`)
//!
//! Only two line shapes are understood; everything else in the file is
//! ignored:
//!
//! - `[submodule "<name>"]` opens a new submodule record
//! - `path = <value>` sets the path of the most recently opened record
//!
//! A `path` line seen before any section header belongs to nothing and is
//! skipped. A second `path` line inside the same section overwrites the first.

use crate::artifacts::core::debug_log;
use crate::artifacts::status::submodule::Submodule;
use anyhow::Context;
use derive_new::new;
use regex::Regex;
use std::path::Path;

/// Name of the submodule configuration file at the repository root
pub const GITMODULES_FILE: &str = ".gitmodules";

/// Regex pattern for a submodule section header
const SECTION_REGEX: &str = r#"^\s*\[submodule\s+"([^"]*)"\]\s*$"#;

/// Regex pattern for a path assignment
const PATH_REGEX: &str = r"^\s*path\s*=\s*(.*)$";

#[derive(Debug, new)]
pub struct GitModules {
    /// Path to the `.gitmodules` file
    path: Box<Path>,
}

impl GitModules {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Discover the declared submodules
    ///
    /// # Returns
    ///
    /// `None` if there is no `.gitmodules` file. Otherwise the records in
    /// file order; an unreadable file yields an empty list.
    pub fn load(&self) -> Option<Vec<Submodule>> {
        if !self.exists() {
            return None;
        }

        let submodules = self.read().unwrap_or_else(|_error| {
            debug_log!("ignoring {}: {:#}", self.path.display(), _error);
            Vec::new()
        });

        Some(submodules)
    }

    fn read(&self) -> anyhow::Result<Vec<Submodule>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        parse_submodules(&content)
    }
}

/// Scan `.gitmodules` content line by line into submodule records
pub fn parse_submodules(content: &str) -> anyhow::Result<Vec<Submodule>> {
    let section_re = Regex::new(SECTION_REGEX)
        .with_context(|| format!("invalid submodule section regex: {SECTION_REGEX}"))?;
    let path_re =
        Regex::new(PATH_REGEX).with_context(|| format!("invalid path regex: {PATH_REGEX}"))?;

    let mut submodules = Vec::<Submodule>::new();

    for line in content.lines() {
        if let Some(caps) = section_re.captures(line) {
            submodules.push(Submodule::new(caps[1].to_string(), None));
        } else if let Some(caps) = path_re.captures(line)
            && let Some(current) = submodules.last_mut()
        {
            current.set_path(caps[1].trim().to_string());
        }
    }

    Ok(submodules)
}
