//! Configuration for the Weight Control console

use core_config::{ConfigError, FromEnv, env_parse_or_default};
use database::sqlite::SqliteConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Application configuration
///
/// - `APP_ENV` (default: development)
/// - `DATABASE_URL` and `DB_*` (see [`SqliteConfig`])
/// - `SEED_DATABASE` (default: true)
/// - `REQUEST_TIMEOUT_SECS` (default: 10)
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub sqlite: SqliteConfig,
    pub seed_database: bool,
    pub request_timeout: Duration,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let request_timeout_secs: u64 = env_parse_or_default("REQUEST_TIMEOUT_SECS", 10)?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "REQUEST_TIMEOUT_SECS".to_string(),
                details: "must be at least 1 second".to_string(),
            });
        }

        Ok(Self {
            environment: Environment::from_env(),
            sqlite: SqliteConfig::from_env()?,
            seed_database: env_parse_or_default("SEED_DATABASE", true)?,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

impl Config {
    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(mut self, database_url: Option<String>, no_seed: bool) -> Self {
        if let Some(url) = database_url {
            self.sqlite.url = url;
        }
        if no_seed {
            self.seed_database = false;
        }
        self
    }
}
