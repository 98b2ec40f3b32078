//! Runtime settings taken from the environment
//!
//! - `SUBSTATUS_GIT`: git executable to run (defaults to `git`)
//! - `CLICOLOR_FORCE`: keep colours even when stdout is not a terminal
//!
//! `NO_COLOR` and `CLICOLOR` are honoured by `colored` directly.

use derive_new::new;
use is_terminal::IsTerminal;

/// Environment variable overriding the git executable
pub const GIT_ENV: &str = "SUBSTATUS_GIT";

const FORCE_COLOR_ENV: &str = "CLICOLOR_FORCE";
const DEFAULT_GIT: &str = "git";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Config {
    git_executable: String,
    color: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let git_executable = git_executable_from(std::env::var(GIT_ENV).ok());
        let force_color = std::env::var(FORCE_COLOR_ENV).is_ok_and(|value| value != "0");

        Self::new(git_executable, force_color || std::io::stdout().is_terminal())
    }

    pub fn git_executable(&self) -> &str {
        &self.git_executable
    }

    /// Turn colouring off globally when the report is not headed for a terminal
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

fn git_executable_from(value: Option<String>) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_GIT.to_string())
}
