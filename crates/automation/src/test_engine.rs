//! A throwaway automation engine for tests: records what it receives and
//! answers with a fixed status.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::client::SECRET_HEADER;

#[derive(Debug, Clone)]
pub struct Captured {
    pub secret: Option<String>,
    pub body: Value,
}

pub struct TestEngine {
    pub url: String,
    seen: Arc<Mutex<Vec<Captured>>>,
}

impl TestEngine {
    pub fn requests(&self) -> Vec<Captured> {
        self.seen.lock().unwrap().clone()
    }
}

type EngineState = (Arc<Mutex<Vec<Captured>>>, StatusCode);

async fn capture(
    State((seen, status)): State<EngineState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    let secret = headers
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    seen.lock().unwrap().push(Captured { secret, body });
    status
}

/// Serve on an ephemeral localhost port until the test runtime shuts down.
pub async fn spawn_engine(status: StatusCode) -> TestEngine {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/hook", post(capture))
        .with_state((seen.clone(), status));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestEngine {
        url: format!("http://{addr}/hook"),
        seen,
    }
}
