//! Repository status artifacts
//!
//! Value types produced while building a status report:
//!
//! - `query`: The closed set of questions asked of the version-control tool
//! - `submodule`: Submodule records discovered in `.gitmodules`
//! - `last_commit`: Branch and most recent commit of one repository
//! - `tree_status`: Clean/dirty working tree state

pub mod last_commit;
pub mod query;
pub mod submodule;
pub mod tree_status;
