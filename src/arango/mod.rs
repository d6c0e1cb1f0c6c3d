pub mod error;
pub mod models;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use error::DbError;
use models::{ApiError, CursorBatch};

/// Server-level connection. Holds the base URL and the shared HTTP client;
/// dropped implicitly at process exit.
pub struct DbClient {
    http: Client,
    base_url: String,
}

impl DbClient {
    pub fn new(config: &Config) -> Result<Self, DbError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub async fn create_database(&self, name: &str) -> Result<(), DbError> {
        let url = format!("{}/_api/database", self.base_url);
        let body = json!({ "name": name });
        check(self.http.post(&url).json(&body).send().await?).await?;
        Ok(())
    }

    /// Switch context to the named database, verifying it is reachable.
    /// Unlike creation, failures here always propagate.
    pub async fn use_database(&self, name: &str) -> Result<DatabaseHandle, DbError> {
        let db_url = format!("{}/_db/{}", self.base_url, name);
        let url = format!("{}/_api/database/current", db_url);
        check(self.http.get(&url).send().await?).await?;

        Ok(DatabaseHandle {
            http: self.http.clone(),
            db_url,
            name: name.to_string(),
        })
    }
}

/// Connection scoped to one database.
pub struct DatabaseHandle {
    http: Client,
    db_url: String,
    name: String,
}

impl DatabaseHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local handle only; does not verify existence on the server.
    pub fn collection(&self, name: &str) -> CollectionHandle {
        CollectionHandle {
            http: self.http.clone(),
            db_url: self.db_url.clone(),
            name: name.to_string(),
        }
    }

    pub async fn create_collection(&self, name: &str) -> Result<(), DbError> {
        let url = format!("{}/_api/collection", self.db_url);
        let body = json!({ "name": name });
        check(self.http.post(&url).json(&body).send().await?).await?;
        Ok(())
    }

    /// Fetch every document in a collection, draining the cursor batch by
    /// batch. No pagination cap, so cost grows with collection size.
    pub async fn query_all(&self, collection: &str) -> Result<Vec<serde_json::Value>, DbError> {
        let url = format!("{}/_api/cursor", self.db_url);
        let body = json!({ "query": scan_query(collection) });
        let response = check(self.http.post(&url).json(&body).send().await?).await?;
        let mut batch: CursorBatch = response.json().await?;

        let mut docs = batch.result;
        while batch.has_more {
            let id = match batch.id.as_deref() {
                Some(id) => id.to_string(),
                None => break,
            };
            let next_url = format!("{}/_api/cursor/{}", self.db_url, id);
            let response = check(self.http.put(&next_url).send().await?).await?;
            batch = response.json().await?;
            docs.append(&mut batch.result);
        }

        Ok(docs)
    }
}

/// Handle to one collection within a database.
pub struct CollectionHandle {
    http: Client,
    db_url: String,
    name: String,
}

impl CollectionHandle {
    pub async fn fetch<T: DeserializeOwned>(&self, key: &str) -> Result<T, DbError> {
        let url = format!("{}/_api/document/{}/{}", self.db_url, self.name, key);
        let response = check(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn insert<T: Serialize>(&self, doc: &T) -> Result<(), DbError> {
        let url = format!("{}/_api/document/{}", self.db_url, self.name);
        check(self.http.post(&url).json(doc).send().await?).await?;
        Ok(())
    }

    /// Merge `patch` onto the stored document and return the updated state.
    pub async fn patch<P: Serialize>(
        &self,
        key: &str,
        patch: &P,
    ) -> Result<serde_json::Value, DbError> {
        let url = format!(
            "{}/_api/document/{}/{}?returnNew=true",
            self.db_url, self.name, key
        );
        let response = check(self.http.patch(&url).json(patch).send().await?).await?;
        let mut body: serde_json::Value = response.json().await?;
        Ok(body
            .get_mut("new")
            .map(serde_json::Value::take)
            .unwrap_or(body))
    }
}

fn scan_query(collection: &str) -> String {
    format!("FOR doc IN {} RETURN doc", collection)
}

/// Convert non-success responses into classified errors, reading the
/// server's error envelope when one is present.
async fn check(response: Response) -> Result<Response, DbError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let api = response.json::<ApiError>().await.unwrap_or(ApiError {
        error: true,
        error_num: 0,
        error_message: String::new(),
    });
    let message = if api.error && !api.error_message.is_empty() {
        api.error_message
    } else {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    };

    Err(DbError::from_response(status.as_u16(), api.error_num, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_query_targets_collection() {
        assert_eq!(scan_query("graph"), "FOR doc IN graph RETURN doc");
    }
}
