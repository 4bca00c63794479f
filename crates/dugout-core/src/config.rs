// Configuration loading and parsing (config/dugout.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::category::StatCategory;
use crate::dataset::DatasetFormat;

/// Name of the config file inside `config/` (and `defaults/`).
pub const CONFIG_FILE: &str = "dugout.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub board: BoardConfig,
    pub data: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// The stat shown in the lineup table and picker list.
    pub category: StatCategory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    /// Player dataset, `.json` or `.csv`, relative to the working directory.
    pub players: String,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Parse and validate a config from TOML text. `path` is only used in errors.
///
/// Surrounding whitespace in `data.players` is stripped, so the stored path
/// is exactly the one that was validated.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    config.data.players = config.data.players.trim().to_string();
    validate(&config)?;
    Ok(config)
}

/// Load and validate `config/dugout.toml` relative to `base_dir`.
///
/// Does not create the file; `load_config()` seeds it from `defaults/` first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    parse_config(&text, &path)
}

/// Seed `config/dugout.toml` from `defaults/dugout.toml` on first run.
///
/// An existing config is left alone. Returns the path written, if any.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.is_file() {
        return Ok(None);
    }

    let default = base_dir.join("defaults").join(CONFIG_FILE);
    if !default.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no {} and no {} to seed it from; run from the project root",
                target.display(),
                default.display()
            ),
        });
    }

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }
    std::fs::copy(&default, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {} to {}: {e}", default.display(), target.display()),
    })?;

    info!("Seeded {} from {}", target.display(), default.display());
    Ok(Some(target))
}

/// Load config relative to the current working directory, seeding it from
/// `defaults/` when missing.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_file(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let players = config.data.players.as_str();
    if players.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.players".into(),
            message: "must not be empty".into(),
        });
    }
    if DatasetFormat::from_path(Path::new(players)).is_none() {
        return Err(ConfigError::ValidationError {
            field: "data.players".into(),
            message: format!("must end in .json or .csv, got {players}"),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
