// Player dataset loading and normalization.
//
// Accepts either a JSON array of player objects or a CSV file with the same
// column names (Player, Team, HR, BA, OPS_Plus, WAR, OBP). Rows that cannot
// be used are skipped with a warning rather than failing the whole load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::player::PlayerRecord;
use crate::pool::PlayerPool;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("unsupported dataset format for {path}: expected .json or .csv")]
    UnsupportedFormat { path: String },

    #[error("validation error: {0}")]
    Validation(String),
}

/// On-disk dataset formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DatasetFormat::Json),
            "csv" => Some(DatasetFormat::Csv),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Raw serde struct (private)
// ---------------------------------------------------------------------------

/// One player row as written in the dataset. Stats are read as f64 so that
/// exports with fractional counting stats still load; counts are rounded.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPlayer {
    Player: String,
    #[serde(default)]
    Team: String,
    #[serde(default)]
    HR: Option<f64>,
    #[serde(default)]
    BA: Option<f64>,
    #[serde(default, alias = "OPS+")]
    OPS_Plus: Option<f64>,
    #[serde(default)]
    WAR: Option<f64>,
    #[serde(default)]
    OBP: Option<f64>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Drop a non-finite stat, logging which one.
fn finite(name: &str, column: &str, value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if !v.is_finite() => {
            warn!("ignoring non-finite {} for '{}'", column, name);
            None
        }
        other => other,
    }
}

/// Convert a raw row into a record, or `None` if the row has no name.
///
/// A blank name would be indistinguishable from an empty lineup slot, so
/// such rows never reach the pool.
fn normalize(raw: RawPlayer) -> Option<PlayerRecord> {
    let name = raw.Player.trim().to_string();
    if name.is_empty() {
        warn!("skipping player row with blank name (team '{}')", raw.Team.trim());
        return None;
    }

    let home_runs = finite(&name, "HR", raw.HR).map(|v| v.round().max(0.0) as u32);
    let batting_average = finite(&name, "BA", raw.BA);
    let ops_plus = finite(&name, "OPS_Plus", raw.OPS_Plus).map(|v| v.round() as i32);
    let war = finite(&name, "WAR", raw.WAR);
    let on_base = finite(&name, "OBP", raw.OBP);

    Some(PlayerRecord {
        team: raw.Team.trim().to_string(),
        home_runs,
        batting_average,
        ops_plus,
        war,
        on_base,
        name,
    })
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn load_json_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, serde_json::Error> {
    let rows: Vec<serde_json::Value> = serde_json::from_reader(rdr)?;
    let mut players = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<RawPlayer>(row) {
            Ok(raw) => players.extend(normalize(raw)),
            Err(e) => warn!("skipping malformed player entry {}: {}", i, e),
        }
    }
    Ok(players)
}

fn load_csv_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    // Surface a missing or unreadable header row as an error instead of
    // silently returning zero players.
    reader.headers()?;
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        match result {
            Ok(raw) => players.extend(normalize(raw)),
            Err(e) => warn!("skipping malformed player row: {}", e),
        }
    }
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public loaders
// ---------------------------------------------------------------------------

/// Parse players from any reader in the given format.
pub fn load_from_reader<R: Read>(
    rdr: R,
    format: DatasetFormat,
    source_name: &str,
) -> Result<PlayerPool, DatasetError> {
    let players = match format {
        DatasetFormat::Json => load_json_from_reader(rdr).map_err(|e| DatasetError::Json {
            path: source_name.to_string(),
            source: e,
        })?,
        DatasetFormat::Csv => load_csv_from_reader(rdr).map_err(|e| DatasetError::Csv {
            path: source_name.to_string(),
            source: e,
        })?,
    };

    if players.is_empty() {
        return Err(DatasetError::Validation(format!(
            "{} produced zero valid players",
            source_name
        )));
    }

    Ok(PlayerPool::new(players))
}

/// Load the player pool from a `.json` or `.csv` file.
pub fn load_players(path: &Path) -> Result<PlayerPool, DatasetError> {
    let source = path.display().to_string();
    let format = DatasetFormat::from_path(path)
        .ok_or_else(|| DatasetError::UnsupportedFormat { path: source.clone() })?;
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: source.clone(),
        source: e,
    })?;
    let pool = load_from_reader(std::io::BufReader::new(file), format, &source)?;
    info!("Loaded {} players from {}", pool.len(), source);
    Ok(pool)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
