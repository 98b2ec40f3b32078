use derive_new::new;
use std::path::{Path, PathBuf};

/// Shown in place of the path for a section that never declared one
const MISSING_PATH_LABEL: &str = "(no path configured)";

/// A submodule declared in `.gitmodules`
///
/// The path stays `None` until a `path = ...` line is seen inside the
/// record's section; such a record is kept but never resolves to a directory.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Submodule {
    name: String,
    path: Option<String>,
}

impl Submodule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: String) {
        self.path = Some(path);
    }

    /// The path as written in the configuration, for display
    pub fn configured_path(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => MISSING_PATH_LABEL,
        }
    }

    /// Locate the submodule's working directory under `root`
    ///
    /// Returns `None` when the path is absent, empty, or does not name an
    /// existing directory.
    pub fn resolve(&self, root: &Path) -> Option<PathBuf> {
        self.path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(|path| root.join(path))
            .filter(|dir| dir.is_dir())
    }
}
