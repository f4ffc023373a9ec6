//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::SocketAddr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on
    pub server_addr: SocketAddr,
    /// Path of the SQLite database file
    pub storage_path: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_ADDR` - Listen address (default: 0.0.0.0:3000)
    /// - `STORAGE_PATH` - SQLite database file (default: students.db)
    pub fn from_env() -> Self {
        Self {
            server_addr: env::var("SERVER_ADDR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_addr),
            storage_path: env::var("STORAGE_PATH").unwrap_or_else(|_| "students.db".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: default_addr(),
            storage_path: "students.db".to_string(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.storage_path, "students.db");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_ADDR");
        env::remove_var("STORAGE_PATH");

        let config = Config::from_env();
        assert_eq!(config.server_addr, default_addr());
        assert_eq!(config.storage_path, "students.db");
    }

    #[test]
    fn test_config_from_env_ignores_unparseable_addr() {
        env::set_var("SERVER_ADDR", "not an address");

        let config = Config::from_env();
        assert_eq!(config.server_addr, default_addr());

        env::remove_var("SERVER_ADDR");
    }
}
