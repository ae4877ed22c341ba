use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Verify the connection by running `SELECT 1`.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running SQLite health check");

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("SQLite health check failed: {}", e))
    })?;

    debug!("SQLite health check passed");
    Ok(())
}
