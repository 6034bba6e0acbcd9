use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiClient, RawResponse, Transport};
use crate::settings::IMAGE_BASE;

pub const TEST_BASE: &str = "http://backend.test";

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub params: Vec<(String, String)>,
}

#[derive(Clone, Default)]
pub struct FakeTransport {
    routes: Arc<Mutex<HashMap<String, Result<RawResponse, String>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(self, path: &str, outcome: Result<RawResponse, String>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), outcome);
        self
    }

    pub fn ok(self, path: &str, body: Value) -> Self {
        self.status(path, 200, body.to_string())
    }

    pub fn status(self, path: &str, status: u16, body: String) -> Self {
        self.route(path, Ok(RawResponse { status, body }))
    }

    pub fn unreachable(self, path: &str, error: &str) -> Self {
        self.route(path, Err(error.to_string()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.url).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<RawResponse, String> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        let path = url.strip_prefix(TEST_BASE).unwrap_or(url);
        self.routes
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(format!("no route for {}", path)))
    }
}

pub fn client_with(fake: &FakeTransport, ttl: Duration) -> ApiClient {
    ApiClient::new(
        String::from(TEST_BASE),
        String::from(IMAGE_BASE),
        Arc::new(fake.clone()),
        ttl,
    )
}
