//! Database schema definitions

/// SQL to create the actors table.
///
/// `id` is the rowid alias, so `INSERT OR REPLACE` keyed on it replaces the
/// existing row instead of appending a duplicate.
pub const CREATE_ACTORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS actors (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    gender TEXT NOT NULL
)
"#;

/// SQL to upsert one actor
pub const UPSERT_ACTOR: &str = r#"
INSERT OR REPLACE INTO actors (id, first_name, last_name, gender)
VALUES (?1, ?2, ?3, ?4)
"#;

/// SQL for the bounded report query. No ORDER BY: rows come back in the
/// engine's natural order.
pub const SELECT_ACTORS_LIMIT: &str =
    "SELECT id, first_name, last_name, gender FROM actors LIMIT ?1";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_ACTORS_TABLE]
}
