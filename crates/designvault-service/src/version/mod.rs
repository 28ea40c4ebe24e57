//! Design version history.

pub mod service;

pub use service::{CommitVersion, ServiceHealth, VersionService};
