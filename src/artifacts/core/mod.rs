//! Core utilities and shared types
//!
//! This module contains shared utilities used across the report:
//!
//! - `Indent`: column offset applied to every report line
//! - `debug_log!`: diagnostic output gated behind the `debug_status` feature

use derive_new::new;

/// Number of columns added by each nesting level of the report
const INDENT_STEP: usize = 2;

/// Macro for debug logging that is enabled with the debug_status feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("running {} in {}", query, dir.display());
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_status")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_log;

/// Leading whitespace of a report line
///
/// Displays as `width` spaces, so it can be interpolated straight into
/// `writeln!` format strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// The indent one nesting level below this one
    pub fn deeper(self) -> Self {
        Self::new(self.width + INDENT_STEP)
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl std::fmt::Display for Indent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:width$}", "", width = self.width)
    }
}
