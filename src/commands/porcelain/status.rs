use crate::areas::repository::Repository;
use crate::artifacts::core::{Indent, debug_log};
use crate::artifacts::status::last_commit::LastCommit;
use crate::artifacts::status::query::VcsQuery;
use crate::artifacts::status::submodule::Submodule;
use crate::artifacts::status::tree_status::TreeStatus;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

const PARENT_HEADER: &str = "Parent repository";
const SUBMODULES_HEADER: &str = "Submodules";

// Each check converts its own failure into a report line; only a broken
// writer makes these methods return an error.
impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        self.report_parent()?;
        self.report_submodules()?;

        Ok(())
    }

    fn report_parent(&self) -> anyhow::Result<()> {
        let indent = Indent::default().deeper();

        writeln!(self.writer(), "{}", PARENT_HEADER.bold())?;
        self.report_last_commit(self.path(), indent)?;
        self.report_tree_status(self.path(), indent)?;
        writeln!(self.writer())?;

        Ok(())
    }

    fn report_submodules(&self) -> anyhow::Result<()> {
        let Some(submodules) = self.modules().load() else {
            debug_log!("no {} found, skipping submodules", self.modules().path().display());
            return Ok(());
        };

        let indent = Indent::default().deeper();
        writeln!(self.writer(), "{}", SUBMODULES_HEADER.bold())?;

        if submodules.is_empty() {
            writeln!(self.writer(), "{indent}No submodules found")?;
            return Ok(());
        }

        for submodule in &submodules {
            self.report_submodule(submodule, indent)?;
        }

        Ok(())
    }

    fn report_submodule(&self, submodule: &Submodule, indent: Indent) -> anyhow::Result<()> {
        let inner = indent.deeper();

        writeln!(self.writer(), "{indent}{}", submodule.name().cyan().bold())?;

        match submodule.resolve(self.path()) {
            Some(dir) => {
                self.report_last_commit(&dir, inner)?;
                self.report_tree_status(&dir, inner)?;
            }
            None => {
                writeln!(
                    self.writer(),
                    "{inner}{} {}",
                    "Directory does not exist:".red(),
                    submodule.configured_path()
                )?;
            }
        }

        writeln!(self.writer())?;

        Ok(())
    }

    pub fn report_last_commit(&self, dir: &Path, indent: Indent) -> anyhow::Result<()> {
        let last_commit = LastCommit::from_queries(
            self.query(VcsQuery::Branch, dir),
            self.query(VcsQuery::LastCommit, dir),
        );

        writeln!(self.writer(), "{indent}{last_commit}")?;

        Ok(())
    }

    pub fn report_tree_status(&self, dir: &Path, indent: Indent) -> anyhow::Result<()> {
        match TreeStatus::from_query(self.query(VcsQuery::ShortStatus, dir)) {
            TreeStatus::Clean => {
                writeln!(self.writer(), "{indent}{}", "Working tree clean".green())?;
            }
            TreeStatus::Changed(changes) => {
                writeln!(self.writer(), "{indent}{}", "Working tree has changes:".yellow())?;
                let inner = indent.deeper();
                for change in changes {
                    writeln!(self.writer(), "{inner}{change}")?;
                }
            }
            TreeStatus::Unavailable => {
                writeln!(self.writer(), "{indent}{}", "Error checking status".red())?;
            }
        }

        Ok(())
    }
}
