//! Git status reporting for a repository and its submodules
//!
//! - `areas`: Repository handle, git process seam, `.gitmodules` reader, config
//! - `artifacts`: Value types the report is built from
//! - `commands`: The `status` report itself

pub mod areas;
pub mod artifacts;
pub mod commands;
