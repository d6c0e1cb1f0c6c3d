use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::arango::models::ProbeEvent;
use crate::arango::DatabaseHandle;
use crate::bootstrap::ensure_collection;
use crate::config::PROBE_COLLECTION;

/// Insert one timestamped event, then time a full scan of the probe
/// collection, extracting the `date` field from every document. The
/// collection is never cleaned up, so the scan covers all prior runs too.
pub async fn probe_query(db: &DatabaseHandle) -> Result<Vec<String>> {
    tracing::info!("Query probe starting");

    let collection = ensure_collection(db, PROBE_COLLECTION)
        .await
        .context("Failed to resolve probe collection")?;

    let event = ProbeEvent::at(Utc::now());
    collection
        .insert(&event)
        .await
        .with_context(|| format!("Failed to insert probe event '{}'", event.key))?;
    tracing::info!("Inserted probe event '{}'", event.key);

    let started = Instant::now();
    let docs = db
        .query_all(PROBE_COLLECTION)
        .await
        .context("Probe query failed")?;
    let dates = extract_dates(&docs);
    let elapsed = started.elapsed();

    tracing::info!(
        "Query probe extracted {} dates in {:?}",
        dates.len(),
        elapsed
    );

    Ok(dates)
}

/// Placeholder for future graph traversals; logs markers only.
pub async fn probe_graph(_db: &DatabaseHandle) -> Result<()> {
    tracing::info!("Graph probe starting");
    tracing::info!("Graph probe complete (no-op)");
    Ok(())
}

fn extract_dates(docs: &[serde_json::Value]) -> Vec<String> {
    docs.iter()
        .filter_map(|doc| doc.get("date"))
        .filter_map(|date| date.as_str())
        .map(|date| date.to_string())
        .collect()
}
