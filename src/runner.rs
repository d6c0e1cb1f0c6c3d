use std::time::Duration;

use anyhow::{Context, Result};

use crate::arango::DbClient;
use crate::bootstrap::ensure_database;
use crate::config::Config;
use crate::metadata::upsert_metadata;
use crate::probes::{probe_graph, probe_query};

/// Pause before exit so any in-flight server-side work settles.
const SETTLE_DELAY: Duration = Duration::from_millis(2500);

/// Run the whole workflow in sequence: bootstrap, probes, metadata upsert.
/// Only a bootstrap failure is fatal; probe and upsert failures are logged
/// and the remaining stages still run.
pub async fn run(config: &Config) -> Result<()> {
    tracing::info!(
        "Connecting to {} ({}:{})",
        config.base_url,
        config.host,
        config.port
    );

    let client = DbClient::new(config).context("Failed to build database client")?;
    let db = ensure_database(&client, config)
        .await
        .with_context(|| format!("Failed to bootstrap database '{}'", config.database))?;

    if let Err(err) = probe_query(&db).await {
        tracing::error!("Query probe failed: {:#}", err);
    }
    if let Err(err) = probe_graph(&db).await {
        tracing::error!("Graph probe failed: {:#}", err);
    }

    if let Err(err) = upsert_metadata(&db, &config.collection).await {
        tracing::error!("Metadata upsert failed: {:#}", err);
    }

    tokio::time::sleep(SETTLE_DELAY).await;
    tracing::info!("Done");

    Ok(())
}
