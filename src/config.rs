use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_CSV_PATH: &str = "IMDB-actors.csv";
pub const DEFAULT_DATABASE_PATH: &str = "./actors.db";
pub const DEFAULT_CONFIG_PATH: &str = "actordb.toml";
pub const DEFAULT_QUERY_LIMIT: usize = 10;

/// On-disk configuration. Every field is optional; unset fields fall back
/// to the defaults above.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ActorDbConfig {
    pub database: Option<String>,
    pub csv: Option<String>,
    pub limit: Option<usize>,
}

impl ActorDbConfig {
    /// A config with every default spelled out, as written by `init`
    pub fn with_defaults() -> Self {
        Self {
            database: Some(DEFAULT_DATABASE_PATH.to_string()),
            csv: Some(DEFAULT_CSV_PATH.to_string()),
            limit: Some(DEFAULT_QUERY_LIMIT),
        }
    }
}

/// Effective settings for a run: CLI flag, then config file, then default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub csv: PathBuf,
    pub limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            csv: PathBuf::from(DEFAULT_CSV_PATH),
            limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

impl Settings {
    pub fn resolve(
        config: Option<&ActorDbConfig>,
        database: Option<PathBuf>,
        csv: Option<PathBuf>,
        limit: Option<usize>,
    ) -> Self {
        let defaults = Self::default();
        let file = config.cloned().unwrap_or_default();

        Self {
            database: database
                .or_else(|| file.database.map(PathBuf::from))
                .unwrap_or(defaults.database),
            csv: csv
                .or_else(|| file.csv.map(PathBuf::from))
                .unwrap_or(defaults.csv),
            limit: limit.or(file.limit).unwrap_or(defaults.limit),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

pub fn load_config(path: Option<&Path>) -> Result<Option<ActorDbConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ActorDbConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ActorDbConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
