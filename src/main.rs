//! actordb CLI - load actors from CSV into SQLite and report on them

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use actordb::config::{self, ActorDbConfig, Settings};
use actordb::storage::ActorStore;
use actordb::ui::{self, Icons};
use actordb::{ingest, report, IngestStats, ReportFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "actordb")]
#[command(version)]
#[command(about = "Load actor records from CSV into SQLite and print a short report")]
#[command(long_about = r#"
actordb creates the `actors` table, upserts every row of a CSV file into it
(keyed by id) and prints the first rows as a pipe-delimited table.

Example usage:
  actordb
  actordb run --csv IMDB-actors.csv --limit 10
  actordb query --format table
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file (defaults to actordb.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema, load the CSV and print the report (default)
    Run {
        /// Path to the CSV file
        #[arg(short, long)]
        csv: Option<PathBuf>,

        /// Maximum number of rows to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (plain, table, json)
        #[arg(short, long, default_value = "plain")]
        format: String,
    },

    /// Create the schema and load the CSV without printing a report
    Load {
        /// Path to the CSV file
        #[arg(short, long)]
        csv: Option<PathBuf>,
    },

    /// Print the report from an existing database
    Query {
        /// Maximum number of rows to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (plain, table, json)
        #[arg(short, long, default_value = "plain")]
        format: String,
    },

    /// Print a single actor by id
    Show {
        /// Actor id
        #[arg(long)]
        id: i64,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Every failure is fatal and ends up here.
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = config::load_config(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Run {
        csv: None,
        limit: None,
        format: ReportFormat::default().to_string(),
    });

    match command {
        Commands::Run { csv, limit, format } => {
            let format: ReportFormat = format.parse()?;
            let settings = Settings::resolve(file_config.as_ref(), cli.database, csv, limit);

            let store = open_store(&settings.database)?;
            let stats = load(&store, &settings.csv)?;
            print_load_summary(&settings, &stats);
            query(&store, settings.limit, format)?;
            store.close().context("Error closing database")?;
        }

        Commands::Load { csv } => {
            let settings = Settings::resolve(file_config.as_ref(), cli.database, csv, None);

            let store = open_store(&settings.database)?;
            let stats = load(&store, &settings.csv)?;
            print_load_summary(&settings, &stats);
            store.close().context("Error closing database")?;
        }

        Commands::Query { limit, format } => {
            let format: ReportFormat = format.parse()?;
            let settings = Settings::resolve(file_config.as_ref(), cli.database, None, limit);

            let store = open_store(&settings.database)?;
            query(&store, settings.limit, format)?;
            store.close().context("Error closing database")?;
        }

        Commands::Show { id } => {
            let settings = Settings::resolve(file_config.as_ref(), cli.database, None, None);

            let store = open_store(&settings.database)?;
            match store.get_actor(id).context("Error querying database")? {
                Some(actor) => {
                    ui::info(Icons::PERSON, "Actor", &actor.full_name());
                    println!("{}", actor);
                }
                None => anyhow::bail!("No actor with id {}", id),
            }
            store.close().context("Error closing database")?;
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &ActorDbConfig::with_defaults(), force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}

/// Open the database and make sure the schema exists
fn open_store(database: &Path) -> anyhow::Result<ActorStore> {
    config::ensure_db_dir(database)
        .with_context(|| format!("Error creating directory for {}", database.display()))?;
    ui::info(Icons::DATABASE, "Database", &database.display().to_string());
    ActorStore::open(database)
        .with_context(|| format!("Error creating schema in {}", database.display()))
}

fn load(store: &ActorStore, csv: &Path) -> anyhow::Result<IngestStats> {
    ui::header("Loading actors");
    ui::info(Icons::FILE, "CSV", &csv.display().to_string());
    ingest::populate(store, csv)
        .with_context(|| format!("Error loading CSV file {}", csv.display()))
}

fn query(store: &ActorStore, limit: usize, format: ReportFormat) -> anyhow::Result<usize> {
    report::print(store, limit, format).context("Error querying database")
}

fn print_load_summary(settings: &Settings, stats: &IngestStats) {
    ui::success("Load complete");
    if ui::is_quiet() {
        return;
    }
    let rows = stats.rows.to_string();
    let database = settings.database.display().to_string();
    eprintln!(
        "{}",
        ui::stats_table(&[("Rows upserted", rows.as_str()), ("Database", database.as_str())])
    );
}
