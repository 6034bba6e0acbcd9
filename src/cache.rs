use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::media::ApiResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    path: String,
    params: Vec<(String, String)>,
}

impl RequestKey {
    pub fn new(path: &str, params: &[(&str, String)]) -> Self {
        let mut params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        params.sort();
        Self {
            path: path.to_string(),
            params,
        }
    }
}

struct CacheEntry<T> {
    data: T,
    created_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            created_at: Instant::now(),
        }
    }

    fn is_valid(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() < ttl
    }
}

pub struct ResponseCache {
    ttl: Duration,
    entries: HashMap<RequestKey, CacheEntry<ApiResult<serde_json::Value>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &RequestKey) -> Option<ApiResult<serde_json::Value>> {
        self.entries
            .get(key)
            .filter(|e| e.is_valid(self.ttl))
            .map(|e| e.data.clone())
    }

    pub fn insert(&mut self, key: RequestKey, outcome: ApiResult<serde_json::Value>) {
        let ttl = self.ttl;
        self.entries.retain(|_, e| e.is_valid(ttl));
        self.entries.insert(key, CacheEntry::new(outcome));
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}
