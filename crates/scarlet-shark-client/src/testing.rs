//! Recording transport for unit tests.

use crate::transport::{Transport, TransportResponse};
use async_trait::async_trait;
use scarlet_shark_core::Result;
use std::sync::{Arc, Mutex};

/// One recorded GET
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// Answers every request with a fixed status and body and records the calls
#[derive(Clone)]
pub struct StubTransport {
    status: u16,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn json(value: &serde_json::Value) -> Self {
        Self::new(200, value.to_string())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Query string of the only recorded request
    pub fn last_query(&self) -> String {
        let requests = self.requests();
        let url = &requests.last().expect("no request recorded").url;
        url.split_once('?').map(|(_, q)| q.to_string()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        });

        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}
