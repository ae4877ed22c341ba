use sea_orm::ConnectOptions;
use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_parse_or_default, ConfigError, FromEnv};

/// Connection string used when `DATABASE_URL` is not set.
///
/// `mode=rwc` lets SQLite create the file on first run.
pub const DEFAULT_SQLITE_URL: &str = "sqlite://weight_control.db?mode=rwc";

/// SQLite connection pool settings
///
/// SQLite serialises writers, so the pool is kept small.
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// let config = SqliteConfig::new("sqlite://weight_control.db?mode=rwc");
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SQLITE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// - `DATABASE_URL` (default: [`DEFAULT_SQLITE_URL`])
/// - `DB_MAX_CONNECTIONS` (default: 5)
/// - `DB_MIN_CONNECTIONS` (default: 1)
/// - `DB_CONNECT_TIMEOUT_SECS` (default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
/// - `DB_SQLX_LOGGING` (default: false)
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_SQLITE_URL),
            max_connections: env_parse_or_default("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: env_parse_or_default("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_secs: env_parse_or_default(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            acquire_timeout_secs: env_parse_or_default(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            sqlx_logging: env_parse_or_default("DB_SQLX_LOGGING", defaults.sqlx_logging)?,
        })
    }
}
