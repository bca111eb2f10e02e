#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Each test gets its own migrated in-memory database, so tests never share rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    Ok(models::db::connect_in_memory().await?)
}
