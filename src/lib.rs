//! # actordb - CSV to SQLite actor loader
//!
//! Loads actor records from a CSV file into an SQLite table and reports on them.
//!
//! actordb provides:
//! - An idempotent `actors` schema
//! - Bulk upsert of CSV rows keyed by actor id
//! - A bounded query rendered as a pipe-delimited text report

pub mod actor;
pub mod config;
pub mod ingest;
pub mod report;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use actor::Actor;
pub use ingest::IngestStats;
pub use report::ReportFormat;
pub use storage::ActorStore;

/// Result type alias for actordb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for actordb operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}
