//! Engine configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::use_cases::auth::DEFAULT_AUTH_DELAY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// JSON spell list; the bundled examples are served when unset.
    pub spells_path: Option<PathBuf>,
    /// Session storage file; the platform config dir is used when unset.
    pub storage_path: Option<PathBuf>,
    pub auth_delay: Duration,
    /// Comma-separated origins, or `*`.
    pub cors_allowed_origins: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 3000,
            spells_path: None,
            storage_path: None,
            auth_delay: DEFAULT_AUTH_DELAY,
            cors_allowed_origins: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset
    /// and unparseable numbers fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let server_port = get("SERVER_PORT")
            .or_else(|| get("PORT"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.server_port);
        let auth_delay = get("MOCK_AUTH_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.auth_delay);

        Self {
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            spells_path: get("SPELLBOOK_SPELLS_PATH").map(PathBuf::from),
            storage_path: get("SPELLBOOK_STORAGE_PATH").map(PathBuf::from),
            auth_delay,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.auth_delay, Duration::from_millis(800));
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("SPELLBOOK_SPELLS_PATH", "/data/spells.json"),
            ("SPELLBOOK_STORAGE_PATH", "/tmp/session.json"),
            ("MOCK_AUTH_DELAY_MS", "0"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:5173"),
        ]);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.spells_path, Some(PathBuf::from("/data/spells.json")));
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/session.json")));
        assert_eq!(config.auth_delay, Duration::ZERO);
        assert_eq!(
            config.cors_allowed_origins.as_deref(),
            Some("http://localhost:5173")
        );
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        assert_eq!(config(&[("PORT", "9000")]).server_port, 9000);
        assert_eq!(
            config(&[("SERVER_PORT", "9001"), ("PORT", "9000")]).server_port,
            9001
        );
    }

    #[test]
    fn bad_numbers_and_blank_values_use_defaults() {
        let config = config(&[
            ("SERVER_PORT", "not-a-port"),
            ("MOCK_AUTH_DELAY_MS", "-5"),
            ("SPELLBOOK_SPELLS_PATH", "  "),
        ]);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.auth_delay, DEFAULT_AUTH_DELAY);
        assert_eq!(config.spells_path, None);
    }
}
