use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE: &str = "trackdeck.log";

fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "trackdeck")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from(".trackdeck/logs"))
}

/// File-only logging; stdout belongs to the terminal UI. Filter comes from
/// `TRACKDECK_LOG` (falling back to `RUST_LOG`, then `info`).
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = log_directory();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env("TRACKDECK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
