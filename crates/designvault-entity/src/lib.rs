//! # designvault-entity
//!
//! Domain entity models for DesignVault. `DesignVersion` is the only
//! table row; the rest are value objects built from it. Serialized field
//! names are camelCase to match the HTTP contract.

pub mod version;
