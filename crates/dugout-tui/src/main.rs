// Dugout entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config (copying defaults on first run)
// 3. Load the player dataset
// 4. Run the draft board until the user quits

use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use tracing::{error, info};

use dugout_core::{config, dataset};
use dugout_tui::tui::{self, ViewState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Dugout starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: category={}, players={}",
        config.board.category, config.data.players
    );

    let pool = dataset::load_players(Path::new(&config.data.players))
        .with_context(|| format!("failed to load players from {}", config.data.players))?;
    info!("Loaded {} players", pool.len());

    let view_state = ViewState::new(pool, config.board.category);
    if let Err(e) = tui::run(view_state).await {
        error!("TUI error: {}", e);
        return Err(e);
    }

    info!("Dugout shut down cleanly");
    Ok(())
}

/// Directory for log files: the platform data-local dir, else `./logs`.
fn log_dir() -> anyhow::Result<PathBuf> {
    match ProjectDirs::from("", "", "dugout") {
        Some(dirs) => Ok(dirs.data_local_dir().join("logs")),
        None => Ok(std::env::current_dir()?.join("logs")),
    }
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("dugout.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dugout_tui=info,dugout_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
