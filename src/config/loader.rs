// Configuration loader
// Loads from ~/.liam/config.toml, then environment variables. Missing
// configuration is not an error: the service runs in canned-reply mode.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::settings::{BackendSettings, Config};

/// Load configuration from the Liam config file or environment
pub fn load_config() -> Result<Config> {
    let mut config = match config_path() {
        Some(path) if path.exists() => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            tracing::info!(path = %path.display(), "Loaded configuration");
            config
        }
        _ => Config::default(),
    };

    // Environment variables fill in a backend when the file doesn't name one
    if config.backend.is_none() {
        if let (Ok(base_url), Ok(api_key)) = (
            std::env::var("LIAM_BACKEND_URL"),
            std::env::var("LIAM_API_KEY"),
        ) {
            if !base_url.is_empty() && !api_key.is_empty() {
                config.backend = Some(BackendSettings {
                    base_url,
                    api_key,
                    model: std::env::var("LIAM_BACKEND_MODEL").ok(),
                });
            }
        }
    }

    if config.backend.is_none() {
        tracing::info!("No backend configured, replies will use the canned tone tables");
    }

    Ok(config)
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".liam/config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_backend() {
        let config = Config::default();
        assert!(config.backend.is_none());
    }
}
