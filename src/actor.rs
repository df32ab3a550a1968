//! Actor record - the single entity stored in the `actors` table

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Column names in CSV and table order.
pub const COLUMNS: [&str; 4] = ["id", "first_name", "last_name", "gender"];

/// An actor row.
///
/// `id` is the upsert key: writing an actor whose id is already present
/// replaces the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Actor {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "First Name")]
    pub first_name: String,
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    #[tabled(rename = "Gender")]
    pub gender: String,
}

impl Actor {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.into(),
        }
    }

    /// Full display name ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.id, self.first_name, self.last_name, self.gender
        )
    }
}
