//! Configuration loader for the `kenya-farm-iot` API service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Every setting is optional; a bare environment
//! yields a service listening on `0.0.0.0:8080`.
//!
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::{anyhow, Result};

/// Parse an optional environment variable into `$ty`, falling back to a default.
macro_rules! parse_env {
    ($lookup:expr, $var_name:expr, $ty:ty, $default:expr) => {
        $lookup($var_name)
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // ---
    /// Address the HTTP listener binds to.
    pub host: IpAddr,

    /// TCP port the HTTP listener binds to.
    pub port: u16,

    /// How long in-flight requests may drain after a stop signal.
    pub shutdown_grace: Duration,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `APP_HOST` – bind address (default: `0.0.0.0`)
/// - `APP_PORT` – bind port (default: 8080)
/// - `SHUTDOWN_GRACE_SECS` – drain window after SIGTERM/Ctrl+C (default: 30)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    load_from(|name| env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn load_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let host = parse_env!(lookup, "APP_HOST", IpAddr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let port = parse_env!(lookup, "APP_PORT", u16, 8080);
    let grace_secs = parse_env!(lookup, "SHUTDOWN_GRACE_SECS", u64, 30);

    Ok(Config {
        host,
        port,
        shutdown_grace: Duration::from_secs(grace_secs),
    })
}

impl Config {
    /// Socket address for the HTTP listener.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  APP_HOST            : {}", self.host);
        tracing::info!("  APP_PORT            : {}", self.port);
        tracing::info!(
            "  SHUTDOWN_GRACE_SECS : {}",
            self.shutdown_grace.as_secs()
        );
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> Result<Config> {
        // ---
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_from(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        // ---
        let cfg = load_with(&[]).unwrap();

        assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.shutdown_grace, Duration::from_secs(30));
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        // ---
        let cfg = load_with(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("SHUTDOWN_GRACE_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(cfg.shutdown_grace, Duration::from_secs(5));
    }

    #[test]
    fn test_ipv6_host() {
        // ---
        let cfg = load_with(&[("APP_HOST", "::1"), ("APP_PORT", "8000")]).unwrap();
        assert_eq!(cfg.socket_addr().to_string(), "[::1]:8000");
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        // ---
        let err = load_with(&[("APP_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"), "got: {err}");

        // Out of range for u16
        let err = load_with(&[("APP_PORT", "70000")]).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"), "got: {err}");

        let err = load_with(&[("APP_HOST", "localhost")]).unwrap_err();
        assert!(err.to_string().contains("APP_HOST"), "got: {err}");

        let err = load_with(&[("SHUTDOWN_GRACE_SECS", "-1")]).unwrap_err();
        assert!(err.to_string().contains("SHUTDOWN_GRACE_SECS"), "got: {err}");
    }
}
