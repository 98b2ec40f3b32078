/// Working tree state as reported by the short status query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeStatus {
    /// No pending modifications
    Clean,
    /// One trimmed entry per line of the short status listing, in order
    Changed(Vec<String>),
    /// The status query itself failed
    Unavailable,
}

impl TreeStatus {
    pub fn from_query(output: anyhow::Result<String>) -> Self {
        match output {
            Ok(output) => {
                let changes = output
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>();

                if changes.is_empty() {
                    TreeStatus::Clean
                } else {
                    TreeStatus::Changed(changes)
                }
            }
            Err(_) => TreeStatus::Unavailable,
        }
    }
}
