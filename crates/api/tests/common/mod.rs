//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use api::{app, AppState};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use store::{MemoryStore, PostStore};
use tower::ServiceExt;
use webhooks::WebhookRouter;
use workflow::{ContentStatus, GeneratedPost};

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

/// App over an empty in-memory store and the given webhook router.
pub fn build_test_app(webhooks: WebhookRouter) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), Arc::new(webhooks));
    TestApp {
        router: app(state),
        store,
    }
}

/// Insert a post already sitting in `status`.
pub async fn seed_post(store: &MemoryStore, status: ContentStatus) -> GeneratedPost {
    let mut post = GeneratedPost::new(uuid::Uuid::new_v4(), "Product launch", "Big news today.");
    post.status = status;
    store.insert(post).await.unwrap()
}

pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    role: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let headers: Vec<(&str, &str)> = role.map(|r| ("x-user-role", r)).into_iter().collect();
    send_with_headers(router, method, uri, &headers, body).await
}

pub async fn send_with_headers(
    router: Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    router.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(router: Router, uri: &str, role: Option<&str>) -> Response<Body> {
    send(router, Method::GET, uri, role, None).await
}

pub async fn post_json(router: Router, uri: &str, role: Option<&str>, body: Value) -> Response<Body> {
    send(router, Method::POST, uri, role, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
