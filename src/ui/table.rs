use tabled::{settings::Style, Table, Tabled};

use crate::actor::Actor;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Box-drawn table of actors, one row each
pub fn actors_table(actors: &[Actor]) -> String {
    Table::new(actors).with(Style::rounded()).to_string()
}

/// Two-column metric/value table; empty input renders nothing
pub fn stats_table(stats: &[(&str, &str)]) -> String {
    if stats.is_empty() {
        return String::new();
    }

    let rows = stats.iter().map(|(label, value)| TableRow {
        metric: label.to_string(),
        value: value.to_string(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
