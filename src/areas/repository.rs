use crate::areas::gitmodules::{GITMODULES_FILE, GitModules};
use crate::areas::vcs::Vcs;
use crate::artifacts::status::query::VcsQuery;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// The parent repository a report is built for
///
/// Holds the canonical root path, the sink every report line is written to,
/// and the `Vcs` used to query the root and each submodule.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    vcs: Box<dyn Vcs>,
    modules: GitModules,
}

impl Repository {
    pub fn new(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        vcs: Box<dyn Vcs>,
    ) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("cannot access repository directory {}", path.display()))?;

        if !path.is_dir() {
            anyhow::bail!("not a directory: {}", path.display());
        }

        let modules = GitModules::new(path.join(GITMODULES_FILE).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            vcs,
            modules,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn modules(&self) -> &GitModules {
        &self.modules
    }

    /// Ask the version-control tool `query` about `working_dir`
    pub fn query(&self, query: VcsQuery, working_dir: &Path) -> anyhow::Result<String> {
        self.vcs.run_query(query, working_dir)
    }
}
