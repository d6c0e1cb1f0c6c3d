use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error envelope the server attaches to failed responses.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: bool,
    #[serde(rename = "errorNum", default)]
    pub error_num: i64,
    #[serde(rename = "errorMessage", default)]
    pub error_message: String,
}

/// One batch of a streaming query result.
#[derive(Debug, Deserialize)]
pub struct CursorBatch {
    pub result: Vec<serde_json::Value>,
    #[serde(rename = "hasMore", default)]
    pub has_more: bool,
    #[serde(default)]
    pub id: Option<String>,
}

/// The singleton metadata document stored under key `meta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "_key")]
    pub key: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Metadata {
    /// Seed inserted when no metadata document exists yet. The lowercase
    /// author is only observable until the first patch lands.
    pub fn default_seed() -> Self {
        Self {
            key: "meta".to_string(),
            author: "joel".to_string(),
            updated: None,
        }
    }
}

/// Fields merged onto the metadata document on every run.
#[derive(Debug, Serialize)]
pub struct MetadataPatch {
    pub author: String,
    pub updated: String,
}

impl MetadataPatch {
    pub fn now() -> Self {
        Self {
            author: "Joel".to_string(),
            updated: Utc::now().to_rfc3339(),
        }
    }
}

/// Timestamped record written by the query probe. Accumulates across runs,
/// never cleaned up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeEvent {
    #[serde(rename = "_key")]
    pub key: String,
    pub date: String,
}

impl ProbeEvent {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            key: format!("event_{}", now.timestamp_millis()),
            date: now.format("%Y%m%d_%H%M%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_probe_event_key_and_date_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 16, 5, 9).unwrap();
        let event = ProbeEvent::at(now);
        assert_eq!(event.key, format!("event_{}", now.timestamp_millis()));
        assert_eq!(event.date, "20240307_160509");
    }

    #[test]
    fn test_metadata_seed_shape() {
        let seed = Metadata::default_seed();
        let json = serde_json::to_value(&seed).unwrap();
        assert_eq!(json["_key"], "meta");
        assert_eq!(json["author"], "joel");
        assert!(json.get("updated").is_none());
    }

    #[test]
    fn test_metadata_patch_is_current_and_parseable() {
        let before = Utc::now();
        let patch = MetadataPatch::now();
        assert_eq!(patch.author, "Joel");
        let updated: DateTime<Utc> = patch.updated.parse().unwrap();
        assert!(updated >= before);
    }

    #[test]
    fn test_cursor_batch_deserializes_single_batch() {
        let batch: CursorBatch = serde_json::from_str(
            r#"{"result": [{"date": "20240307_160509"}], "hasMore": false}"#,
        )
        .unwrap();
        assert_eq!(batch.result.len(), 1);
        assert!(!batch.has_more);
        assert!(batch.id.is_none());
    }
}
