//! Database connection settings.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::DbError;

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Where to connect.
#[derive(Clone)]
pub enum DbTarget {
    /// A full `postgres://` connection URL.
    Url(String),
    /// Individual connection settings.
    Parts {
        server: String,
        port: u16,
        database: String,
        user: String,
        password: String,
        /// Encrypt the connection.
        encrypt: bool,
        /// Accept the server certificate without verification.
        trust_server_certificate: bool,
    },
}

impl fmt::Debug for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(_) => f.write_str("Url(<redacted>)"),
            Self::Parts {
                server,
                port,
                database,
                user,
                encrypt,
                trust_server_certificate,
                ..
            } => f
                .debug_struct("Parts")
                .field("server", server)
                .field("port", port)
                .field("database", database)
                .field("user", user)
                .field("encrypt", encrypt)
                .field("trust_server_certificate", trust_server_certificate)
                .finish_non_exhaustive(),
        }
    }
}

/// Database configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub target: DbTarget,
    /// Pool size upper bound (default: `20`).
    pub max_connections: u32,
    /// How long to wait for a pooled connection (default: `5s`).
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `DATABASE_URL`            | unset; when set, the `DB_*` parts are ignored |
    /// | `DB_SERVER`               | required without `DATABASE_URL` |
    /// | `DB_PORT`                 | `5432`  |
    /// | `DB_NAME`                 | required without `DATABASE_URL` |
    /// | `DB_USER`                 | required without `DATABASE_URL` |
    /// | `DB_PASSWORD`             | empty   |
    /// | `DB_ENCRYPT`              | `false` |
    /// | `DB_TRUST_CERT`           | `false` |
    /// | `DB_MAX_CONNECTIONS`      | `20`    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`     |
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            non_empty(key).ok_or_else(|| DbError::Config(format!("{key} must be set")))
        };

        let target = match non_empty("DATABASE_URL") {
            Some(url) => DbTarget::Url(url),
            None => DbTarget::Parts {
                server: required("DB_SERVER")?,
                port: parse_or(non_empty("DB_PORT"), "DB_PORT", DEFAULT_PORT)?,
                database: required("DB_NAME")?,
                user: required("DB_USER")?,
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                encrypt: flag(non_empty("DB_ENCRYPT")),
                trust_server_certificate: flag(non_empty("DB_TRUST_CERT")),
            },
        };

        let max_connections = parse_or(
            non_empty("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let acquire_timeout_secs = parse_or(
            non_empty("DB_ACQUIRE_TIMEOUT_SECS"),
            "DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            target,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    /// Build the sqlx connect options for this configuration.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DbError> {
        match &self.target {
            DbTarget::Url(url) => PgConnectOptions::from_str(url)
                .map_err(|e| DbError::Config(format!("DATABASE_URL is invalid: {e}"))),
            DbTarget::Parts {
                server,
                port,
                database,
                user,
                password,
                encrypt,
                trust_server_certificate,
            } => Ok(PgConnectOptions::new()
                .host(server)
                .port(*port)
                .database(database)
                .username(user)
                .password(password)
                .ssl_mode(ssl_mode(*encrypt, *trust_server_certificate))),
        }
    }
}

/// TLS mode from the encrypt / trust-certificate flags.
pub fn ssl_mode(encrypt: bool, trust_server_certificate: bool) -> PgSslMode {
    match (encrypt, trust_server_certificate) {
        (false, _) => PgSslMode::Disable,
        (true, true) => PgSslMode::Require,
        (true, false) => PgSslMode::VerifyFull,
    }
}

fn flag(value: Option<String>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> Result<T, DbError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| DbError::Config(format!("{key} must be a number, got '{raw}'"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://mes:secret@db:5432/mes"),
            ("DB_SERVER", "ignored"),
        ]))
        .unwrap();

        assert_matches!(config.target, DbTarget::Url(ref url) if url.ends_with("/mes"));
        assert!(config.connect_options().is_ok());
    }

    #[test]
    fn parts_are_assembled_with_defaults() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_SERVER", "10.0.0.5"),
            ("DB_NAME", "mes"),
            ("DB_USER", "monitor"),
        ]))
        .unwrap();

        assert_matches!(
            config.target,
            DbTarget::Parts { port: 5432, encrypt: false, ref password, .. } if password.is_empty()
        );
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "10.0.0.5");
        assert_eq!(options.get_port(), 5432);
    }

    #[test]
    fn missing_server_is_a_config_error() {
        let result = DbConfig::from_lookup(lookup(&[("DB_NAME", "mes"), ("DB_USER", "u")]));
        assert_matches!(result, Err(DbError::Config(msg)) if msg.contains("DB_SERVER"));
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let result = DbConfig::from_lookup(lookup(&[
            ("DB_SERVER", "db"),
            ("DB_PORT", "abc"),
            ("DB_NAME", "mes"),
            ("DB_USER", "u"),
        ]));
        assert_matches!(result, Err(DbError::Config(msg)) if msg.contains("DB_PORT"));
    }

    #[test]
    fn tls_mode_follows_flags() {
        assert_matches!(ssl_mode(false, true), PgSslMode::Disable);
        assert_matches!(ssl_mode(true, true), PgSslMode::Require);
        assert_matches!(ssl_mode(true, false), PgSslMode::VerifyFull);
    }

    #[test]
    fn debug_output_hides_credentials() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_SERVER", "db"),
            ("DB_NAME", "mes"),
            ("DB_USER", "u"),
            ("DB_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
