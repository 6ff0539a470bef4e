use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use stocktake::adapter::inbound::http::app_router;
use stocktake::adapter::outbound::memory::MemoryProductStore;

/// In-process client for the API backed by a memory store.
pub struct TestApi {
    router: Router,
    store: Arc<MemoryProductStore>,
}

/// Status and decoded JSON body (`Value::Null` when the body is empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub raw: Vec<u8>,
}

impl TestApi {
    pub fn new() -> Self {
        Self::with_static_dir(std::env::temp_dir().join("stocktake-no-static"))
    }

    pub fn with_static_dir(dir: impl AsRef<std::path::Path>) -> Self {
        let store = Arc::new(MemoryProductStore::new());
        let router = app_router(Arc::clone(&store), dir);
        Self { router, store }
    }

    pub fn store(&self) -> &MemoryProductStore {
        &self.store
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, Body::empty()).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send("POST", uri, Body::from(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        self.send("POST", uri, Body::from(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send("PUT", uri, Body::from(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send("DELETE", uri, Body::empty()).await
    }

    /// Create a product and return the response body, asserting success.
    pub async fn create(&self, name: &str, category: &str, quantity: i64, price: f64) -> Value {
        let response = self
            .post(
                "/api/products",
                json!({"name": name, "category": category, "quantity": quantity, "price": price}),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "body: {}", response.body);
        response.body
    }

    async fn send(&self, method: &str, uri: &str, body: Body) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .expect("build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let raw = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body")
            .to_vec();
        let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);
        TestResponse { status, body, raw }
    }
}
