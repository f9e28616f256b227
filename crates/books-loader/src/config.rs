//! Configuration types for the bulk load.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

use crate::errors::LoadError;

/// Number of rows written by a default run.
pub const DEFAULT_ROW_COUNT: u64 = 1_000_000;

/// Publication year stamped on every generated book.
pub const DEFAULT_YEAR: i32 = 2020;

/// Credentials and address of the target database.
///
/// Values are passed to the driver as-is. The only check performed is that the
/// port read from the environment parses as a `u16`. Secrets are never
/// serialized; reading a config back fills them from the defaults.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub dbname: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub host: String,
    pub port: u16,
    /// Full connection URL. Takes precedence over the individual fields.
    #[serde(skip_serializing)]
    pub url: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            dbname: "books_db".to_string(),
            user: "user".to_string(),
            password: "password".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            url: None,
        }
    }
}

// Hand-written so the password never reaches logs.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ConnectionConfig {
    /// Reads `DATABASE_URL` and the libpq-style `PG*` variables from the process
    /// environment, falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, LoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConnectionConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dbname) = lookup("PGDATABASE") {
            config.dbname = dbname;
        }
        if let Some(user) = lookup("PGUSER") {
            config.user = user;
        }
        if let Some(password) = lookup("PGPASSWORD") {
            config.password = password;
        }
        if let Some(host) = lookup("PGHOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PGPORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| LoadError::Config(format!("PGPORT is not a valid port: {port:?}")))?;
        }
        config.url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        Ok(config)
    }

    /// Builds driver options from this configuration.
    pub fn connect_options(&self) -> Result<PgConnectOptions, LoadError> {
        if let Some(url) = &self.url {
            return url
                .parse::<PgConnectOptions>()
                .map_err(|e| LoadError::Config(format!("invalid DATABASE_URL: {e}")));
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname))
    }
}

/// Parameters of a single load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Number of rows to insert, numbered from 1.
    pub row_count: u64,
    /// Year written to every row.
    pub year: i32,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            year: DEFAULT_YEAR,
        }
    }
}

impl LoadConfig {
    /// Reads `BOOKS_ROW_COUNT` from the process environment.
    pub fn from_env() -> Result<Self, LoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(count) = lookup("BOOKS_ROW_COUNT") {
            config.row_count = count.trim().parse().map_err(|_| {
                LoadError::Config(format!("BOOKS_ROW_COUNT is not a row count: {count:?}"))
            })?;
        }

        Ok(config)
    }

    /// Overrides the number of rows.
    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = row_count;
        self
    }
}
