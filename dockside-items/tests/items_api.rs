//! Router tests for the item API, driven through `tower::ServiceExt`

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use dockside_items::{
    build_router, Item, ItemStore, ItemsServerConfig, MemoryItemStore, NewItem, StorageError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Store whose every call fails the way the given constructor says
struct FailingStore(fn() -> sqlx::Error);

#[async_trait]
impl ItemStore for FailingStore {
    async fn list(&self) -> Result<Vec<Item>, StorageError> {
        Err((self.0)().into())
    }

    async fn create(&self, _item: NewItem) -> Result<Item, StorageError> {
        Err((self.0)().into())
    }
}

fn app(store: Arc<dyn ItemStore>) -> Router {
    build_router(store, &ItemsServerConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get_items() -> Request<Body> {
    Request::get("/api/items").body(Body::empty()).unwrap()
}

fn post_items(body: &str) -> Request<Body> {
    Request::post("/api/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn empty_table_lists_empty_array() {
    let (status, body) = send(app(Arc::new(MemoryItemStore::new())), get_items()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_then_list_includes_new_item() {
    let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());

    let (_, first) = send(app(store.clone()), post_items(r#"{"name": "gadget"}"#)).await;
    let (status, created) = send(app(store.clone()), post_items(r#"{"name": "widget"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "widget");
    assert_ne!(created["id"], first["id"]);

    let (status, listed) = send(app(store), get_items()).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&created));
}

#[tokio::test]
async fn missing_name_is_400() {
    let store = Arc::new(MemoryItemStore::new());
    let (status, body) = send(app(store.clone()), post_items("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "name is required");

    // Nothing was written
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn null_name_is_400() {
    let (status, _) = send(
        app(Arc::new(MemoryItemStore::new())),
        post_items(r#"{"name": null}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (status, body) = send(
        app(Arc::new(MemoryItemStore::new())),
        post_items(r#"{"name": "#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn wrong_content_type_is_400() {
    let request = Request::post("/api/items")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"name": "widget"}"#))
        .unwrap();
    let (status, _) = send(app(Arc::new(MemoryItemStore::new())), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreachable_store_is_503() {
    let store = Arc::new(FailingStore(|| sqlx::Error::PoolTimedOut));
    let (status, body) = send(app(store), get_items()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "storage_error");
}

#[tokio::test]
async fn failing_statement_is_502() {
    let store = Arc::new(FailingStore(|| sqlx::Error::RowNotFound));
    let (status, _) = send(app(store), post_items(r#"{"name": "widget"}"#)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn health_endpoint() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(Arc::new(MemoryItemStore::new())), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "items");
}

#[tokio::test]
async fn serves_static_front_end_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = std::fs::File::create(dir.path().join("index.html")).unwrap();
    writeln!(index, "<h1>Item Manager</h1>").unwrap();

    let config = ItemsServerConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..ItemsServerConfig::default()
    };
    let app = build_router(Arc::new(MemoryItemStore::new()), &config);

    let response = app
        .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("Item Manager"));
}
