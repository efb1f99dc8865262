//! Testing utilities for helpdesk client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use helpdesk_client::testing::{RecordingTransport, load_fixture};
//!
//! let fixture = load_fixture("ticket_field_options/list.json");
//! let transport = RecordingTransport::new().respond_with(fixture);
//! ```

use serde_json::Value;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use crate::error::Result;
use crate::transport::{ApiRequest, Transport};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// In-memory transport that records every request it is handed.
///
/// Responses are served from a queue in order; once the queue is empty every
/// request is answered with an empty body (`Ok(None)`).
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Value>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body for the next unanswered request.
    pub fn respond_with(self, body: Value) -> Self {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .push_back(body);
        self
    }

    /// Requests sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request);
        Ok(self
            .responses
            .lock()
            .expect("responses lock poisoned")
            .pop_front())
    }
}
