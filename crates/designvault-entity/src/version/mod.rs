//! Design version entities.

pub mod diff;
pub mod model;

pub use diff::{VersionChanges, VersionDiff};
pub use model::{DEFAULT_AUTHOR, DesignVersion, NewVersion};
