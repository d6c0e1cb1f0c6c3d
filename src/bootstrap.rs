use crate::arango::error::DbError;
use crate::arango::{CollectionHandle, DatabaseHandle, DbClient};
use crate::config::Config;

/// Create the target database if absent and return a handle scoped to it.
/// A creation conflict means the database already exists and is ignored;
/// any other creation failure propagates, as does a failed context switch.
pub async fn ensure_database(client: &DbClient, config: &Config) -> Result<DatabaseHandle, DbError> {
    match client.create_database(&config.database).await {
        Ok(()) => tracing::info!("Created database '{}'", config.database),
        Err(err) if err.is_conflict() => {
            tracing::info!("Database '{}' already exists", config.database);
        }
        Err(err) => return Err(err),
    }

    let db = client.use_database(&config.database).await?;
    tracing::info!("Using database '{}'", db.name());

    Ok(db)
}

/// Create a collection if absent and return a handle to it. Idempotent:
/// a second call sees the creation conflict and still returns the handle.
pub async fn ensure_collection(
    db: &DatabaseHandle,
    name: &str,
) -> Result<CollectionHandle, DbError> {
    match db.create_collection(name).await {
        Ok(()) => tracing::info!("Created collection '{}'", name),
        Err(err) if err.is_conflict() => {
            tracing::info!("Collection '{}' already exists", name);
        }
        Err(err) => return Err(err),
    }

    Ok(db.collection(name))
}
