/// Format of the single commit line: `<short-hash> <short-date> <author>: <subject>`
const LAST_COMMIT_FORMAT: &str = "--format=%h %ad %an: %s";

/// The closed set of questions the report asks the version-control tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VcsQuery {
    /// Name of the checked-out branch, empty on a detached HEAD
    Branch,
    /// Most recent commit as a one-line summary
    LastCommit,
    /// Short-format working tree status listing
    ShortStatus,
}

impl VcsQuery {
    /// Command line arguments passed to git for this query
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            VcsQuery::Branch => &["branch", "--show-current"],
            VcsQuery::LastCommit => &["log", "-1", "--date=short", LAST_COMMIT_FORMAT],
            VcsQuery::ShortStatus => &["status", "--short"],
        }
    }
}

impl From<&VcsQuery> for &str {
    fn from(query: &VcsQuery) -> Self {
        match query {
            VcsQuery::Branch => "branch",
            VcsQuery::LastCommit => "last commit",
            VcsQuery::ShortStatus => "short status",
        }
    }
}

impl std::fmt::Display for VcsQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let query_str: &str = self.into();
        write!(f, "{}", query_str)
    }
}
