//! `MockQueryClient` — a test double for `QueryClient`.
//!
//! Records every call so tests can assert on the exact endpoint and
//! payload the dispatcher produced, without a running server.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::{ClientError, QueryClient};

/// Behaviour injected into `MockQueryClient` at construction time.
pub enum MockBehaviour {
    /// Return a specific JSON value for every call.
    ReturnValue(Value),
    /// Fail every call as if the server answered 500.
    Fail(String),
}

/// A mock client that records every `(endpoint, payload)` it receives and
/// returns a programmer-specified result.
pub struct MockQueryClient {
    /// What the client will do when `query` is called.
    pub behaviour: MockBehaviour,
    /// All calls seen by this client (in call order).
    pub calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockQueryClient {
    /// Create a mock that always succeeds with the given value.
    pub fn returning(value: Value) -> Self {
        Self {
            behaviour: MockBehaviour::ReturnValue(value),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always fails with the given server-side message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behaviour: MockBehaviour::Fail(message.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of queries this client has received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Snapshot of every call received so far.
    pub fn recorded_calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryClient for MockQueryClient {
    async fn query(&self, endpoint: &str, params: &Value) -> Result<Value, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_owned(), params.clone()));

        match &self.behaviour {
            MockBehaviour::ReturnValue(value) => Ok(value.clone()),
            MockBehaviour::Fail(message) => Err(ClientError::Api {
                status: 500,
                body: message.clone(),
            }),
        }
    }
}
