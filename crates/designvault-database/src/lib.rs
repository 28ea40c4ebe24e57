//! # designvault-database
//!
//! PostgreSQL connection management, migrations, and the version
//! repositories (PostgreSQL and in-memory).

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{InMemoryVersionRepository, PgVersionRepository, VersionRepository};
