use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{RequestKey, ResponseCache};
use crate::media::{
    ApiError, ApiResult, Category, MovieDetails, MovieId, PosterCard, RecommendationBundle,
    SearchResponse,
};
use crate::settings::{AppSettings, CACHE_TTL, REQUEST_TIMEOUT};

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<RawResponse, String>;
}

pub struct HttpTransport {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<RawResponse, String> {
        let response = self
            .http_client
            .get(url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(RawResponse { status, body })
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    image_base_url: String,
    transport: Arc<dyn Transport>,
    cache: Arc<RwLock<ResponseCache>>,
}

impl ApiClient {
    pub fn new(
        base_url: String,
        image_base_url: String,
        transport: Arc<dyn Transport>,
        ttl: Duration,
    ) -> Self {
        Self {
            base_url,
            image_base_url,
            transport,
            cache: Arc::new(RwLock::new(ResponseCache::new(ttl))),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            settings.api_base.clone(),
            settings.image_base.clone(),
            Arc::new(HttpTransport::new(REQUEST_TIMEOUT)),
            CACHE_TTL,
        )
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    fn cached(&self, key: &RequestKey) -> Option<ApiResult<Value>> {
        self.cache.read().ok()?.get(key)
    }

    fn remember(&self, key: RequestKey, outcome: &ApiResult<Value>) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, outcome.clone());
        }
    }

    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> ApiResult<Value> {
        let key = RequestKey::new(path, params);
        if let Some(cached) = self.cached(&key) {
            debug!(path, "cache hit");
            return cached;
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, ?params, "GET");
        let outcome = match self.transport.get(&url, params).await {
            Ok(raw) => interpret(raw),
            Err(e) => Err(ApiError::Transport(e)),
        };
        match &outcome {
            Err(ApiError::Backend { status, body }) => {
                warn!(path, status = *status, body = %body, "backend returned an error")
            }
            Err(e) => warn!(path, error = %e, "request failed"),
            Ok(_) => {}
        }

        self.remember(key, &outcome);
        outcome
    }

    pub async fn search_titles(&self, query: &str) -> ApiResult<SearchResponse> {
        let params = [("query", query.to_string()), ("page", 1.to_string())];
        decode(self.get("/tmdb/search", &params).await?)
    }

    pub async fn home_feed(&self, category: Category, limit: usize) -> ApiResult<Vec<PosterCard>> {
        let params = [
            ("category", category.as_str().to_string()),
            ("limit", limit.to_string()),
        ];
        decode(self.get("/home", &params).await?)
    }

    pub async fn movie_details(&self, id: MovieId) -> ApiResult<MovieDetails> {
        let json = self.get(&format!("/movie/id/{}", id), &[]).await?;
        if json.as_object().is_some_and(|fields| fields.is_empty()) {
            return Err(ApiError::Empty);
        }
        decode(json)
    }

    pub async fn recommendations(
        &self,
        title: &str,
        tfidf_top_n: usize,
        genre_limit: usize,
    ) -> ApiResult<RecommendationBundle> {
        let params = [
            ("query", title.to_string()),
            ("tfidf_top_n", tfidf_top_n.to_string()),
            ("genre_limit", genre_limit.to_string()),
        ];
        decode(self.get("/movie/search", &params).await?)
    }
}

fn interpret(raw: RawResponse) -> ApiResult<Value> {
    if raw.status >= 400 {
        let body = match serde_json::from_str::<Value>(&raw.body) {
            Ok(json) => json,
            Err(_) => Value::String(raw.body),
        };
        return Err(ApiError::Backend {
            status: raw.status,
            body,
        });
    }
    match serde_json::from_str::<Value>(&raw.body) {
        Ok(Value::Null) => Err(ApiError::Empty),
        Ok(json) => Ok(json),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

fn decode<T: for<'de> Deserialize<'de>>(json: Value) -> ApiResult<T> {
    serde_json::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_image_bytes(url: String) -> Result<Vec<u8>, String> {
    reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_with, FakeTransport};
    use serde_json::json;

    #[tokio::test]
    async fn success_returns_parsed_body() {
        let fake = FakeTransport::new().ok("/movie/id/27205", json!({"title": "Inception"}));
        let client = client_with(&fake, CACHE_TTL);

        let details = client.movie_details(27205).await.unwrap();
        assert_eq!(details.title.as_deref(), Some("Inception"));
        assert_eq!(fake.urls(), ["http://backend.test/movie/id/27205"]);
    }

    #[tokio::test]
    async fn error_status_surfaces_json_body() {
        let fake = FakeTransport::new().status(
            "/movie/id/1",
            404,
            json!({"detail": "TMDB movie not found"}).to_string(),
        );
        let client = client_with(&fake, CACHE_TTL);

        match client.get("/movie/id/1", &[]).await {
            Err(ApiError::Backend { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body["detail"], "TMDB movie not found");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_as_text() {
        let fake = FakeTransport::new().status("/home", 502, String::from("Bad Gateway"));
        let client = client_with(&fake, CACHE_TTL);

        let err = client.get("/home", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), r#""Bad Gateway""#);
    }

    #[tokio::test]
    async fn transport_failure_collapses_into_error() {
        let fake = FakeTransport::new().unreachable("/tmdb/search", "operation timed out");
        let client = client_with(&fake, CACHE_TTL);

        let err = client.search_titles("Batman").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(ref msg) if msg == "operation timed out"));
    }

    #[tokio::test]
    async fn null_and_malformed_bodies_are_errors() {
        let fake = FakeTransport::new()
            .status("/movie/id/1", 200, String::from("null"))
            .status("/movie/id/2", 200, String::from("<html>"))
            .ok("/movie/id/3", json!({}));
        let client = client_with(&fake, CACHE_TTL);

        assert!(matches!(client.movie_details(1).await, Err(ApiError::Empty)));
        assert!(matches!(client.movie_details(3).await, Err(ApiError::Empty)));
        assert!(matches!(
            client.movie_details(2).await,
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn unexpected_shape_is_a_decode_error() {
        let fake = FakeTransport::new().ok("/home", json!({"items": []}));
        let client = client_with(&fake, CACHE_TTL);

        assert!(matches!(
            client.home_feed(Category::Trending, 24).await,
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn identical_calls_within_window_hit_the_network_once() {
        let fake = FakeTransport::new().ok("/home", json!([{"tmdb_id": 1, "title": "A"}]));
        let client = client_with(&fake, CACHE_TTL);
        let params = [("category", String::from("popular")), ("limit", String::from("24"))];

        let first = client.get("/home", &params).await.unwrap();
        let second = client.get("/home", &params).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(fake.call_count(), 1);

        let other = [("category", String::from("upcoming")), ("limit", String::from("24"))];
        client.get("/home", &other).await.unwrap();
        assert_eq!(fake.call_count(), 2);
    }

    #[tokio::test]
    async fn cached_errors_are_replayed_then_expire() {
        let fake = FakeTransport::new().unreachable("/movie/id/9", "connection refused");

        let cached = client_with(&fake, CACHE_TTL);
        cached.get("/movie/id/9", &[]).await.unwrap_err();
        cached.get("/movie/id/9", &[]).await.unwrap_err();
        assert_eq!(fake.call_count(), 1);

        let expiring = client_with(&fake, Duration::ZERO);
        expiring.get("/movie/id/9", &[]).await.unwrap_err();
        expiring.get("/movie/id/9", &[]).await.unwrap_err();
        assert_eq!(fake.call_count(), 3);
    }

    #[tokio::test]
    async fn endpoint_params_match_the_backend_contract() {
        let fake = FakeTransport::new()
            .ok("/tmdb/search", json!({"results": []}))
            .ok("/movie/search", json!({}));
        let client = client_with(&fake, CACHE_TTL);

        client.search_titles("Interstellar").await.unwrap();
        client.recommendations("Interstellar", 12, 12).await.unwrap();

        let calls = fake.calls();
        assert_eq!(
            calls[0].params,
            [("query", "Interstellar"), ("page", "1")].map(|(k, v)| (k.to_string(), v.to_string()))
        );
        assert_eq!(
            calls[1].params,
            [
                ("query", "Interstellar"),
                ("tfidf_top_n", "12"),
                ("genre_limit", "12")
            ]
            .map(|(k, v)| (k.to_string(), v.to_string()))
        );
    }
}
