//! Report data structures
//!
//! This module contains the value types a status report is built from:
//!
//! - `core`: Shared utilities (indentation, debug logging)
//! - `status`: Query kinds, submodule records, commit and working tree state

pub mod core;
pub mod status;
