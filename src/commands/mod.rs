//! Command implementations
//!
//! Commands are written as `impl Repository` blocks so they share the
//! repository's writer and version-control access:
//!
//! - `porcelain`: User-facing reports (status)

pub mod porcelain;
