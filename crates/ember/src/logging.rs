use std::{fs, sync::Mutex};

use color_eyre::eyre::{WrapErr, eyre};
use ember_config::Config;
use tracing_subscriber::filter::EnvFilter;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "EMBER_LOG";

/// Send logs to the configured file. The terminal belongs to the UI, so
/// without a log file nothing is recorded.
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .wrap_err_with(|| format!("invalid log_level {:?}", config.log_level))?,
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))
}
