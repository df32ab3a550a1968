//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::actor::Actor;
use super::schema;

/// SQLite-backed storage for actor records.
///
/// Owns the one connection used by a run; it is released when the store is
/// dropped or explicitly closed.
pub struct ActorStore {
    conn: Connection,
}

impl ActorStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        tracing::debug!("Opened database at {}", path.display());
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema. Safe to call repeatedly.
    pub fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        tracing::info!("Schema created successfully.");
        Ok(())
    }

    /// Close the connection, surfacing any error from SQLite
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    // ========== Actor Operations ==========

    /// Insert or replace an actor
    pub fn upsert_actor(&self, actor: &Actor) -> Result<()> {
        self.conn.execute(
            schema::UPSERT_ACTOR,
            params![actor.id, actor.first_name, actor.last_name, actor.gender],
        )?;
        Ok(())
    }

    /// Insert or replace an actor from raw CSV fields.
    ///
    /// Fields are bound as text; SQLite's column affinity turns the id into
    /// an integer, and rejects it if it is not one.
    pub fn upsert_actor_fields(&self, fields: &[&str; 4]) -> Result<()> {
        self.conn.execute(
            schema::UPSERT_ACTOR,
            params![fields[0], fields[1], fields[2], fields[3]],
        )?;
        Ok(())
    }

    /// Get an actor by id
    pub fn get_actor(&self, id: i64) -> Result<Option<Actor>> {
        self.conn
            .query_row(
                "SELECT id, first_name, last_name, gender FROM actors WHERE id = ?1",
                [id],
                Self::row_to_actor,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Fetch at most `limit` actors in the engine's natural order
    pub fn query_actors(&self, limit: usize) -> Result<Vec<Actor>> {
        let mut stmt = self.conn.prepare(schema::SELECT_ACTORS_LIMIT)?;

        let actors = stmt
            .query_map([limit as i64], Self::row_to_actor)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(actors)
    }

    /// Count all actors
    pub fn count_actors(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM actors", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to an Actor
    fn row_to_actor(row: &rusqlite::Row) -> rusqlite::Result<Actor> {
        Ok(Actor {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            gender: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_actors(n: i64) -> Vec<Actor> {
        (1..=n)
            .map(|i| Actor::new(i, format!("First{i}"), format!("Last{i}"), "M"))
            .collect()
    }

    #[test]
    fn test_schema_is_idempotent() {
        let store = ActorStore::open_in_memory().unwrap();
        store.upsert_actor(&Actor::new(1, "Emma", "Watson", "F")).unwrap();

        store.initialize_schema().unwrap();
        store.initialize_schema().unwrap();

        assert_eq!(store.count_actors().unwrap(), 1);
    }

    #[test]
    fn test_actor_crud() {
        let store = ActorStore::open_in_memory().unwrap();

        let actor = Actor::new(7, "Emma", "Watson", "F");
        store.upsert_actor(&actor).unwrap();

        let retrieved = store.get_actor(7).unwrap().unwrap();
        assert_eq!(retrieved, actor);
        assert!(store.get_actor(8).unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_existing_id() {
        let store = ActorStore::open_in_memory().unwrap();

        store.upsert_actor(&Actor::new(1, "Emma", "Watson", "F")).unwrap();
        store.upsert_actor(&Actor::new(1, "Emma", "Stone", "F")).unwrap();

        assert_eq!(store.count_actors().unwrap(), 1);
        assert_eq!(store.get_actor(1).unwrap().unwrap().last_name, "Stone");
    }

    #[test]
    fn test_upsert_fields_coerces_id() {
        let store = ActorStore::open_in_memory().unwrap();

        store.upsert_actor_fields(&["42", "Tom", "Hanks", "M"]).unwrap();

        let actor = store.get_actor(42).unwrap().unwrap();
        assert_eq!(actor.first_name, "Tom");
    }

    #[test]
    fn test_upsert_fields_rejects_non_integer_id() {
        let store = ActorStore::open_in_memory().unwrap();

        let result = store.upsert_actor_fields(&["abc", "Tom", "Hanks", "M"]);
        assert!(matches!(result, Err(crate::Error::Storage(_))));
    }

    #[test]
    fn test_query_limit() {
        let store = ActorStore::open_in_memory().unwrap();
        assert!(store.query_actors(10).unwrap().is_empty());

        for actor in sample_actors(3) {
            store.upsert_actor(&actor).unwrap();
        }
        assert_eq!(store.query_actors(10).unwrap().len(), 3);

        for actor in sample_actors(25) {
            store.upsert_actor(&actor).unwrap();
        }
        assert_eq!(store.query_actors(10).unwrap().len(), 10);
    }

    #[test]
    fn test_close() {
        let store = ActorStore::open_in_memory().unwrap();
        store.close().unwrap();
    }
}
