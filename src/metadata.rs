use anyhow::{Context, Result};

use crate::arango::models::{Metadata, MetadataPatch};
use crate::arango::DatabaseHandle;
use crate::bootstrap::ensure_collection;

pub const METADATA_KEY: &str = "meta";

/// Fetch-or-create the singleton metadata document, then unconditionally
/// merge a fresh author and timestamp onto it. Leaves exactly one document
/// at the `meta` key regardless of how many times it runs.
pub async fn upsert_metadata(
    db: &DatabaseHandle,
    collection_name: &str,
) -> Result<serde_json::Value> {
    let collection = ensure_collection(db, collection_name)
        .await
        .with_context(|| format!("Failed to resolve collection '{}'", collection_name))?;

    match collection.fetch::<Metadata>(METADATA_KEY).await {
        Ok(existing) => {
            tracing::info!("Found metadata document: {:?}", existing);
        }
        Err(err) if err.is_not_found() => {
            tracing::info!("No metadata document yet ({}), seeding default", err);
            collection
                .insert(&Metadata::default_seed())
                .await
                .context("Failed to seed metadata document")?;
        }
        Err(err) => return Err(err).context("Failed to fetch metadata document"),
    }

    let updated = collection
        .patch(METADATA_KEY, &MetadataPatch::now())
        .await
        .context("Failed to update metadata document")?;
    tracing::info!("Metadata now: {}", updated);

    Ok(updated)
}
