// Configuration structs

use serde::Deserialize;
use std::path::PathBuf;

/// Hosted backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
    pub api_key: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    #[serde(default = "default_session_timeout")]
    pub session_timeout_minutes: u64,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_max_sessions() -> usize {
    100
}

fn default_session_timeout() -> u64 {
    30
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            max_sessions: default_max_sessions(),
            session_timeout_minutes: default_session_timeout(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Hosted backend; absent means canned-reply mode
    #[serde(default)]
    pub backend: Option<BackendSettings>,

    #[serde(default)]
    pub server: ServerSettings,

    /// Optional JSON file overriding the built-in keyword lists
    #[serde(default)]
    pub keywords_path: Option<PathBuf>,

    /// Default tone identifier when a request doesn't specify one
    #[serde(default)]
    pub default_tone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.backend.is_none());
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        assert_eq!(config.server.max_sessions, 100);
        assert_eq!(config.server.session_timeout_minutes, 30);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.backend.is_none());
        assert!(config.keywords_path.is_none());
    }

    #[test]
    fn test_parse_full_toml() {
        let raw = r#"
            default_tone = "casual"
            keywords_path = "/etc/liam/keywords.json"

            [backend]
            base_url = "https://chat.example.com"
            api_key = "secret"
            model = "companion-2"

            [server]
            bind_address = "0.0.0.0:9090"
            max_sessions = 10
        "#;

        let config: Config = toml::from_str(raw).unwrap();
        let backend = config.backend.unwrap();
        assert_eq!(backend.base_url, "https://chat.example.com");
        assert_eq!(backend.model.as_deref(), Some("companion-2"));
        assert_eq!(config.server.bind_address, "0.0.0.0:9090");
        assert_eq!(config.server.max_sessions, 10);
        // Unspecified fields keep their defaults
        assert_eq!(config.server.session_timeout_minutes, 30);
        assert_eq!(config.default_tone.as_deref(), Some("casual"));
    }
}
