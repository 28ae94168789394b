//! Shared test doubles for the core integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use cleancity_remote::{CollectionQuery, RemoteError, RemoteStoreTrait};

/// One observed store call: method, path, query pairs, and body if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Scripted stand-in for the HTTP store. Responses are consumed in call
/// order, which matches the strictly sequential tier contract; every call
/// is recorded for assertions.
#[derive(Default)]
pub struct MockRemoteStore {
    responses: Mutex<VecDeque<Result<Value, RemoteError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    pub fn push_status(&self, status: u16, message: &str) {
        self.responses.lock().unwrap().push_back(Err(RemoteError::Status {
            status,
            message: message.to_string(),
        }));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        query: Option<&CollectionQuery>,
        body: Option<&Value>,
    ) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            params: query.map(|q| q.as_params().to_vec()).unwrap_or_default(),
            body: body.cloned(),
        });
    }

    fn next_response(&self) -> Result<Value, RemoteError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!([])))
    }
}

#[async_trait]
impl RemoteStoreTrait for MockRemoteStore {
    async fn fetch_collection(
        &self,
        path: &str,
        query: &CollectionQuery,
    ) -> Result<Vec<Value>, RemoteError> {
        self.record("GET", path, Some(query), None);
        self.next_response().map(|body| match body {
            Value::Array(records) => records,
            _ => Vec::new(),
        })
    }

    async fn fetch_record(&self, path: &str) -> Result<Value, RemoteError> {
        self.record("GET", path, None, None);
        self.next_response()
    }

    async fn create(&self, path: &str, body: &Value) -> Result<Value, RemoteError> {
        self.record("POST", path, None, Some(body));
        self.next_response()
    }

    async fn update(&self, path: &str, body: &Value) -> Result<Value, RemoteError> {
        self.record("PUT", path, None, Some(body));
        self.next_response()
    }

    async fn delete(&self, path: &str) -> Result<Value, RemoteError> {
        self.record("DELETE", path, None, None);
        self.next_response()
    }
}

/// Issue record as the backend stores it.
pub fn issue_record(id: &str, email: &str) -> Value {
    json!({
        "_id": id,
        "title": format!("Issue {}", id),
        "category": "Garbage",
        "location": "Ward 5",
        "description": "Pile of garbage near the market",
        "image": "",
        "amount": 500,
        "status": "ongoing",
        "email": email,
        "createdAt": "2025-11-10T08:00:00Z"
    })
}

/// Contribution record as the backend stores it.
pub fn contribution_record(id: &str, email: &str, amount: Value) -> Value {
    json!({
        "_id": id,
        "issueId": "i-1",
        "issueTitle": "Overflowing bins",
        "amount": amount,
        "name": "Rahim",
        "email": email,
        "phone": "",
        "address": "Ward 5",
        "additionalInfo": "",
        "avatar": "",
        "createdAt": "2025-11-11T10:00:00Z"
    })
}
