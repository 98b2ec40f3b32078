//! Report collaborators
//!
//! This module contains the pieces a status report talks to:
//!
//! - `config`: Settings read from the environment
//! - `gitmodules`: Submodule discovery from `.gitmodules`
//! - `repository`: Root path, output writer and version-control access
//! - `vcs`: The process seam through which git is queried

pub mod config;
pub mod gitmodules;
pub mod repository;
pub mod vcs;
