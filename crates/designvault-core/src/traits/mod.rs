//! Core traits defined in `designvault-core` and implemented by other crates.

pub mod storage;

pub use storage::BlobStore;
