use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Connect to a SQLite database with the default pool settings
///
/// ```ignore
/// let db = database::sqlite::connect("sqlite://weight_control.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a SqliteConfig
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let url = options.get_url().to_string();
    let db = Database::connect(options).await?;
    info!(url = %url, "Connected to SQLite database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff on failure
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    let result = match retry_config {
        Some(retry_config) => retry_with_backoff(attempt, retry_config).await,
        None => retry(attempt).await,
    };

    result.map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Apply all pending migrations of `M`
///
/// `app_name` is only used for logging.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
