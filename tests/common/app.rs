//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use pixdot::models::AppConfig;
use pixdot::server::{build_router, create_app_state, AppState};
use pixdot::services::{InMemoryStore, Session, SettingsStore};

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub store: Arc<InMemoryStore>,
    pub session: Arc<Session>,
}

impl TestApp {
    /// Create a new test application with default config and an empty store
    pub async fn new() -> Self {
        Self::with_store(AppConfig::default(), InMemoryStore::new()).await
    }

    /// Create a test application with custom config
    pub async fn with_config(config: AppConfig) -> Self {
        Self::with_store(config, InMemoryStore::new()).await
    }

    /// Create a test application over a pre-seeded store
    pub async fn with_store(config: AppConfig, store: InMemoryStore) -> Self {
        let store = Arc::new(store);

        // Create application state using shared server module
        let state = create_app_state(config, store.clone())
            .await
            .expect("Failed to create app state");

        // Keep references for test assertions
        let session = state.session.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            store,
            session,
        }
    }

    /// Create app state for custom router configuration
    pub async fn create_state(store: Arc<dyn SettingsStore>) -> AppState {
        create_app_state(AppConfig::default(), store)
            .await
            .expect("Failed to create app state")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a DELETE request to the given path
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::put(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a raw body and content type
    pub async fn post_bytes(&self, path: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Make an empty POST request
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Add a color and return the resulting palette
    pub async fn add_color(&self, color: &str) -> Vec<String> {
        let response = self
            .post_json("/api/palette", &format!(r#"{{"color": "{color}"}}"#))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "add {color}: {}",
            response.text()
        );
        let json: serde_json::Value = response.json();
        serde_json::from_value(json["colors"].clone()).unwrap()
    }

    /// Upload an image and return whether it was accepted
    pub async fn load_image(&self, content_type: &str, bytes: Vec<u8>) -> bool {
        let response = self.post_bytes("/api/image", content_type, bytes).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        let json: serde_json::Value = response.json();
        json["accepted"].as_bool().unwrap()
    }

    /// Raw persisted value for a store key
    pub async fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).await.unwrap()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }
}
