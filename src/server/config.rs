//! Environment configuration.
//!
//! Every variable has a default, so an empty environment yields a working
//! SQLite-backed setup. `.env` files are loaded by `main` before this runs.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://franchise.db?mode=rwc";
pub const DEFAULT_SEED: u64 = 2025;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    /// Seed used by `generate` when `--seed` is not given.
    pub default_seed: u64,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_level: String,
    pub bind_addr: SocketAddr,
    /// Reported by `GET /health`.
    pub app_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |var: &str, default: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let default_seed = var_or("DEFAULT_SEED", &DEFAULT_SEED.to_string());
        let default_seed = default_seed
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "DEFAULT_SEED".to_string(),
                reason: e.to_string(),
            })?;

        let bind_addr = var_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            default_seed,
            log_level: var_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            bind_addr,
            app_version: var_or("APP_VERSION", env!("CARGO_PKG_VERSION")),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var| vars.get(var).cloned()
    }

    /// Expect defaults for every unset variable
    #[test]
    fn uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.default_seed, 2025);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
    }

    /// Expect set variables to override defaults
    #[test]
    fn reads_variables() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DEFAULT_SEED", " 123 "),
            ("LOG_LEVEL", "debug"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("APP_VERSION", "1.2.3"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.default_seed, 123);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.app_version, "1.2.3");
    }

    /// Expect an error naming the variable for an unparsable seed
    #[test]
    fn rejects_invalid_seed() {
        let result = Config::from_lookup(lookup(&[("DEFAULT_SEED", "-1")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "DEFAULT_SEED"
        ));
    }

    /// Expect an error for an unparsable bind address
    #[test]
    fn rejects_invalid_bind_addr() {
        let result = Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "BIND_ADDR"
        ));
    }
}
