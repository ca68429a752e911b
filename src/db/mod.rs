//! Database module: read-only access to the `users` table.
//!
//! Layout:
//! - `models.rs`: `UserRecord`, a schema-agnostic view of one row
//! - `sqlite.rs`: pool construction and the `UserStore` lookups

pub mod models;
pub mod sqlite;

pub use models::UserRecord;
pub use sqlite::{SqlitePool, UserStore, connect};
