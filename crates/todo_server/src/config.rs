//! Server configuration from environment variables.
//!
//! # Responsibility
//! - Read bind address and logging settings with explicit defaults.
//! - Report malformed values as typed errors instead of panicking.
//!
//! `.env` files are loaded by the binary through `dotenv-flow` before
//! `ServerConfig::from_env` runs, so both sources feed the same lookup.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const HOST_VAR: &str = "TODO_SERVER_HOST";
pub const PORT_VAR: &str = "TODO_SERVER_PORT";
pub const LOG_LEVEL_VAR: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "TODO_LOG_DIR";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// File logging is disabled when unset.
    pub log_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_level: todo_core::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(host) = read(HOST_VAR) {
            config.host = host.parse().map_err(|_| ConfigError::Invalid {
                key: HOST_VAR,
                value: host,
            })?;
        }
        if let Some(port) = read(PORT_VAR) {
            config.port = port.parse().map_err(|_| ConfigError::Invalid {
                key: PORT_VAR,
                value: port,
            })?;
        }
        if let Some(level) = read(LOG_LEVEL_VAR) {
            config.log_level = level;
        }
        config.log_dir = read(LOG_DIR_VAR);

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { key, value } => write!(f, "invalid value `{value}` for {key}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ServerConfig, LOG_DIR_VAR, PORT_VAR};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TODO_SERVER_HOST", "0.0.0.0"),
            (PORT_VAR, "8080"),
            ("TODO_LOG_LEVEL", "warn"),
            (LOG_DIR_VAR, "  "),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "70000")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: PORT_VAR,
                value: "70000".to_string(),
            }
        );
    }
}
