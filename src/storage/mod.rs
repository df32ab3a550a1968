//! Storage Layer - SQLite-backed persistence
//!
//! A single table:
//! - actors(id, first_name, last_name, gender)

pub mod schema;
pub mod sqlite;

pub use sqlite::ActorStore;
