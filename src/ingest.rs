//! CSV ingestion - loads actor rows into the store
//!
//! The whole file is parsed before anything is written, so a malformed file
//! never leaves a partial load behind. The first row is a header and is
//! always discarded.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::actor::COLUMNS;
use crate::storage::ActorStore;
use crate::{Error, Result};

/// Outcome of an ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows upserted (duplicates counted once per occurrence)
    pub rows: usize,
}

impl std::fmt::Display for IngestStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rows upserted: {}", self.rows)
    }
}

/// Populate the actors table from the CSV file at `path`
pub fn populate(store: &ActorStore, path: &Path) -> Result<IngestStats> {
    tracing::info!("Loading actors from {}", path.display());
    let file = File::open(path)?;
    populate_from_reader(store, file)
}

/// Populate the actors table from any CSV source
pub fn populate_from_reader<R: Read>(store: &ActorStore, source: R) -> Result<IngestStats> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

    let mut stats = IngestStats::default();
    for record in &records {
        let fields = row_fields(record)?;
        tracing::debug!("Upserting actor id={}", fields[0]);
        store.upsert_actor_fields(&fields)?;
        stats.rows += 1;
    }

    tracing::info!("Data inserted successfully. {}", stats);
    Ok(stats)
}

fn row_fields(record: &csv::StringRecord) -> Result<[&str; 4]> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let mismatch = || Error::FieldCount {
        line,
        expected: COLUMNS.len(),
        found: record.len(),
    };

    if record.len() != COLUMNS.len() {
        return Err(mismatch());
    }

    Ok([
        record.get(0).ok_or_else(mismatch)?,
        record.get(1).ok_or_else(mismatch)?,
        record.get(2).ok_or_else(mismatch)?,
        record.get(3).ok_or_else(mismatch)?,
    ])
}
