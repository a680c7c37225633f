use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on a single procedure call in seconds (default: `25`).
    /// Always below `request_timeout_secs` so a hung call is reported in
    /// the error envelope before the request itself times out.
    pub procedure_timeout_secs: u64,
    /// How long to wait for the database pool to close on shutdown
    /// (default: `30`).
    pub shutdown_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(
        "PROCEDURE_TIMEOUT_SECS ({procedure}) must be between 1 and REQUEST_TIMEOUT_SECS ({request}) exclusive"
    )]
    TimeoutOrder { procedure: u64, request: u64 },
}

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PROCEDURE_TIMEOUT_SECS: u64 = 25;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `PROCEDURE_TIMEOUT_SECS` | `25`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(non_empty("PORT"), "PORT", 3000_u16, "a port number")?;

        let cors_origins: Vec<String> = non_empty("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(
            non_empty("REQUEST_TIMEOUT_SECS"),
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
            "a whole number of seconds",
        )?;
        let procedure_timeout_secs = match non_empty("PROCEDURE_TIMEOUT_SECS") {
            Some(raw) => parse(raw, "PROCEDURE_TIMEOUT_SECS", "a whole number of seconds")?,
            None => DEFAULT_PROCEDURE_TIMEOUT_SECS.min(request_timeout_secs.saturating_sub(1)),
        };
        let shutdown_timeout_secs = parse_or(
            non_empty("SHUTDOWN_TIMEOUT_SECS"),
            "SHUTDOWN_TIMEOUT_SECS",
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            "a whole number of seconds",
        )?;

        if procedure_timeout_secs == 0 || procedure_timeout_secs >= request_timeout_secs {
            return Err(ConfigError::TimeoutOrder {
                procedure: procedure_timeout_secs,
                request: request_timeout_secs,
            });
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            procedure_timeout_secs,
            shutdown_timeout_secs,
        })
    }
}

fn parse<T: FromStr>(
    raw: String,
    name: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw,
        expected,
    })
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => parse(raw, name, expected),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.procedure_timeout_secs, 25);
        assert_eq!(config.shutdown_timeout_secs, 30);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("REQUEST_TIMEOUT_SECS", "10"),
            ("PROCEDURE_TIMEOUT_SECS", "4"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.procedure_timeout_secs, 4);
    }

    #[test]
    fn bad_port_is_an_error_not_a_panic() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();

        assert_matches!(err, ConfigError::Invalid { name: "PORT", ref value, .. } if value == "eighty");
    }

    #[test]
    fn bad_timeout_is_an_error() {
        assert_matches!(
            load(&[("SHUTDOWN_TIMEOUT_SECS", "-1")]),
            Err(ConfigError::Invalid { name: "SHUTDOWN_TIMEOUT_SECS", .. })
        );
    }

    #[test]
    fn short_request_timeout_pulls_the_procedure_default_below_it() {
        let config = load(&[("REQUEST_TIMEOUT_SECS", "5")]).unwrap();

        assert_eq!(config.procedure_timeout_secs, 4);
    }

    #[test]
    fn procedure_timeout_must_fit_inside_the_request_timeout() {
        assert_matches!(
            load(&[("REQUEST_TIMEOUT_SECS", "10"), ("PROCEDURE_TIMEOUT_SECS", "10")]),
            Err(ConfigError::TimeoutOrder { procedure: 10, request: 10 })
        );
        assert_matches!(
            load(&[("REQUEST_TIMEOUT_SECS", "1")]),
            Err(ConfigError::TimeoutOrder { procedure: 0, request: 1 })
        );
    }
}
