//! Porcelain commands (user-facing reports)
//!
//! ## Commands
//!
//! - `status`: Last commit and working tree state of the parent repository
//!   and of every submodule declared in `.gitmodules`

pub mod status;
