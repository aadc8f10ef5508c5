//! Environment-driven configuration.
//!
//! `main` loads `.env` through `dotenvy` before calling [`AppConfig::from_env`].

use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::domain::ConfigError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "LOG_FORMAT".to_string(),
                message: format!("expected 'pretty' or 'json', got '{other}'"),
            }),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    /// PostgreSQL URL; `None` selects the in-memory store.
    pub database_url: Option<SecretString>,
    pub database_max_connections: u32,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            database_url: None,
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::default(),
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let request_timeout_secs: u64 =
            parse_or(get("REQUEST_TIMEOUT_SECS"), "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECS".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let log_format = match get("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            listen_addr: get("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            database_url: get("DATABASE_URL").map(SecretString::from),
            database_max_connections: parse_or(
                get("DATABASE_MAX_CONNECTIONS"),
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_bytes: parse_or(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            log_format,
            metrics_enabled: parse_or(get("METRICS_ENABLED"), "METRICS_ENABLED", true)?,
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert!(config.database_url.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_body_bytes, 65536);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.metrics_enabled);
    }

    #[test]
    fn test_reads_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "postgres://u:p@localhost/db"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("MAX_BODY_BYTES", "1024"),
            ("LOG_FORMAT", "JSON"),
            ("METRICS_ENABLED", "false"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(
            config.database_url.unwrap().expose_secret(),
            "postgres://u:p@localhost/db"
        );
        assert_eq!(config.database_max_connections, 4);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn test_empty_database_url_is_unset() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("MAX_BODY_BYTES", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "MAX_BODY_BYTES"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_invalid_log_format() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn test_debug_does_not_leak_database_url() {
        let config =
            AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://secret@host/db")]))
                .unwrap();
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("postgres://secret"));
    }
}
