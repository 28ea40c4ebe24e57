//! # designvault-service
//!
//! The version store. [`VersionService`] orchestrates the version
//! repository and the blob store to implement commit, history, revert,
//! compare and delete.
//!
//! Dependencies are provided at construction time via `Arc` references.

pub mod version;

pub use version::{CommitVersion, ServiceHealth, VersionService};
