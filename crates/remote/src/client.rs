//! HTTP access to the remote collection store.

use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde_json::Value;

use crate::errors::RemoteError;
use crate::query::CollectionQuery;

/// Default request timeout; override with [`RemoteStore::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest error-body excerpt carried in a [`RemoteError::Status`].
const MAX_ERROR_BODY: usize = 300;

/// Contract for the remote collection accessor.
///
/// One network round trip per call, no retries, no caching. A non-success
/// response surfaces as [`RemoteError::Status`]; a collection body that is
/// not a JSON array normalizes to an empty list instead of a decode error.
#[async_trait]
pub trait RemoteStoreTrait: Send + Sync {
    /// Fetches a collection endpoint, optionally narrowed by query parameters.
    async fn fetch_collection(
        &self,
        path: &str,
        query: &CollectionQuery,
    ) -> Result<Vec<Value>, RemoteError>;

    /// Fetches a single-record endpoint.
    async fn fetch_record(&self, path: &str) -> Result<Value, RemoteError>;

    /// Creates a record via POST, returning the server's response body.
    async fn create(&self, path: &str, body: &Value) -> Result<Value, RemoteError>;

    /// Replaces a record via PUT, returning the server's response body.
    async fn update(&self, path: &str, body: &Value) -> Result<Value, RemoteError>;

    /// Deletes a record, returning the server's response body.
    async fn delete(&self, path: &str) -> Result<Value, RemoteError>;
}

/// reqwest-backed implementation of [`RemoteStoreTrait`].
pub struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    /// Creates a store for the given API base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a store with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_body(response: reqwest::Response) -> Result<Value, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message: truncate(&message),
            });
        }
        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl RemoteStoreTrait for RemoteStore {
    async fn fetch_collection(
        &self,
        path: &str,
        query: &CollectionQuery,
    ) -> Result<Vec<Value>, RemoteError> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query.as_params());
        }
        let response = request.send().await?;
        let body = Self::read_body(response).await?;
        Ok(normalize_collection(path, body))
    }

    async fn fetch_record(&self, path: &str) -> Result<Value, RemoteError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::read_body(response).await
    }

    async fn create(&self, path: &str, body: &Value) -> Result<Value, RemoteError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::read_body(response).await
    }

    async fn update(&self, path: &str, body: &Value) -> Result<Value, RemoteError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::read_body(response).await
    }

    async fn delete(&self, path: &str) -> Result<Value, RemoteError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::read_body(response).await
    }
}

/// A list endpoint must always yield a list; anything else counts as empty.
fn normalize_collection(path: &str, body: Value) -> Vec<Value> {
    match body {
        Value::Array(records) => records,
        other => {
            warn!(
                "Collection endpoint '{}' returned a non-array body ({}); treating as empty",
                path,
                body_kind(&other)
            );
            Vec::new()
        }
    }
}

fn body_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn truncate(message: &str) -> String {
    if message.len() <= MAX_ERROR_BODY {
        message.to_string()
    } else {
        let cut = message
            .char_indices()
            .take_while(|(i, _)| *i < MAX_ERROR_BODY)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &message[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_body_passes_through() {
        let body = json!([{"a": 1}, {"a": 2}]);
        let records = normalize_collection("/issues", body);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_non_array_body_normalizes_to_empty() {
        assert!(normalize_collection("/issues", json!({"message": "nope"})).is_empty());
        assert!(normalize_collection("/issues", Value::Null).is_empty());
        assert!(normalize_collection("/issues", json!("oops")).is_empty());
    }

    #[test]
    fn test_truncate_keeps_short_messages_intact() {
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn test_truncate_bounds_long_messages() {
        let long = "x".repeat(1000);
        let cut = truncate(&long);
        assert!(cut.len() <= MAX_ERROR_BODY + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let store = RemoteStore::new("https://api.cleancity.app/").unwrap();
        assert_eq!(store.base_url(), "https://api.cleancity.app");
        assert_eq!(store.url("/issues"), "https://api.cleancity.app/issues");
    }
}
