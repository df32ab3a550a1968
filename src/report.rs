//! Query reporter - renders the bounded actor query
//!
//! The plain format is the canonical one:
//!
//! ```text
//! ID | First Name | Last Name | Gender
//! -----------------------------------
//! 1 | Emma | Watson | F
//! ```

use std::io::Write;
use std::str::FromStr;

use crate::actor::Actor;
use crate::storage::ActorStore;
use crate::ui::table;
use crate::{Error, Result};

pub const HEADER: &str = "ID | First Name | Last Name | Gender";
pub const SEPARATOR: &str = "-----------------------------------";

/// How the report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Pipe-delimited lines under a two-line banner
    #[default]
    Plain,
    /// Box-drawn table
    Table,
    /// Pretty-printed JSON array
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Plain => "plain",
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(ReportFormat::Plain),
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Write the plain report: banner, then one line per actor
pub fn write_report<W: Write>(out: &mut W, actors: &[Actor]) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", SEPARATOR)?;
    for actor in actors {
        writeln!(out, "{}", actor)?;
    }
    Ok(())
}

/// Render actors in the requested format
pub fn render(actors: &[Actor], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Plain => {
            let mut buf = Vec::new();
            write_report(&mut buf, actors)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        ReportFormat::Table => Ok(format!("{}\n", table::actors_table(actors))),
        ReportFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(actors)?)),
    }
}

/// Run the bounded query and print the report to stdout.
///
/// Returns the number of rows printed.
pub fn print(store: &ActorStore, limit: usize, format: ReportFormat) -> Result<usize> {
    let actors = store.query_actors(limit)?;
    tracing::debug!("Query returned {} rows (limit {})", actors.len(), limit);

    let rendered = render(&actors, format)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    Ok(actors.len())
}
