//! # designvault-storage
//!
//! Blob store implementations for DesignVault. Supports S3-compatible
//! object stores and the local filesystem, plus helpers for the base64
//! PNG payloads clients commit.

pub mod factory;
pub mod png;
pub mod providers;

pub use factory::build_blob_store;
pub use png::{PNG_CONTENT_TYPE, decode_base64_png, version_object_key};
