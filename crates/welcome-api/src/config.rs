//! Application configuration loaded from environment variables.

/// Port used when `PORT` is unset or not a valid port number.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string. Binds every interface.
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// URL announced in the startup log line.
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_env_uses_defaults() {
        let config = Config::from_lookup(lookup_in(&[]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_port_from_env() {
        let config = Config::from_lookup(lookup_in(&[("PORT", "4000"), ("RUST_LOG", "debug")]));
        assert_eq!(config.port, 4000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(Config::from_lookup(lookup_in(&[("PORT", "abc")])).port, 3000);
        assert_eq!(Config::from_lookup(lookup_in(&[("PORT", "70000")])).port, 3000);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            port: 8080,
            log_level: "debug".to_string(),
        };
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.public_url(), "http://localhost:8080");
    }
}
