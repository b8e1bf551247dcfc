use std::path::PathBuf;

use anyhow::{Context, Result};

use skychart::{app::App, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    App::with_config(config)?.run().await
}

/// Returns the configuration file path.
///
/// `SKYCHART_CONFIG` takes precedence over `~/.config/skychart/config.toml`.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("SKYCHART_CONFIG") {
        return Some(PathBuf::from(path));
    }
    std::env::home_dir().map(|home| home.join(".config/skychart/config.toml"))
}

fn load_config() -> Result<Config> {
    let Some(path) = config_path().filter(|path| path.exists()) else {
        log::info!("No configuration file found, using defaults");
        return Ok(Config::default());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}
