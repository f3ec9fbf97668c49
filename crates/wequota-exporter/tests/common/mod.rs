//! Fake selfcare API for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;

use wequota_core::protocol::{AUTH_PATH, OFFERINGS_PATH, QUOTA_PATH};

pub const AUTH_OK: &str = r#"{"header":{"retCode":"0"},"body":{"token":"tok-1","subscriber":{"subscriberId":"SUB-42"}}}"#;
pub const OFFERINGS_OK: &str = r#"{"header":{"retCode":"0"},"body":{"offeringList":[{"mainOfferingId":"OFF-1"},{"mainOfferingId":"OFF-2"}]}}"#;
pub const QUOTA_OK: &str = r#"{"header":{"retCode":"0"},"body":[{"used":25.0,"total":100.0,"remain":75.0}]}"#;

/// One request as seen by the fake.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub token: Option<String>,
    pub cookie: Option<String>,
    pub channel_id: Option<String>,
    pub language: Option<String>,
    pub user_agent: Option<String>,
    pub body: Value,
}

pub struct FakeUpstream {
    pub auth: Mutex<String>,
    pub offerings: Mutex<String>,
    pub quota: Mutex<String>,
    pub seen: Mutex<Vec<Seen>>,
    /// Held before every reply.
    pub delay: Mutex<Duration>,
}

impl FakeUpstream {
    pub fn happy() -> Arc<Self> {
        Self::with(AUTH_OK, OFFERINGS_OK, QUOTA_OK)
    }

    pub fn with(auth: &str, offerings: &str, quota: &str) -> Arc<Self> {
        Arc::new(Self {
            auth: Mutex::new(auth.to_string()),
            offerings: Mutex::new(offerings.to_string()),
            quota: Mutex::new(quota.to_string()),
            seen: Mutex::new(Vec::new()),
            delay: Mutex::new(Duration::ZERO),
        })
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn seen_paths(&self) -> Vec<String> {
        self.seen().into_iter().map(|s| s.path).collect()
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

async fn handle(
    State(fake): State<Arc<FakeUpstream>>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let path = uri.path().to_string();
    fake.seen.lock().unwrap().push(Seen {
        path: path.clone(),
        token: header_str(&headers, "csrftoken"),
        cookie: header_str(&headers, "cookie"),
        channel_id: header_str(&headers, "channelid"),
        language: header_str(&headers, "languagecode"),
        user_agent: header_str(&headers, "user-agent"),
        body,
    });

    let delay = *fake.delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let reply = if path == AUTH_PATH {
        fake.auth.lock().unwrap().clone()
    } else if path == OFFERINGS_PATH {
        fake.offerings.lock().unwrap().clone()
    } else if path == QUOTA_PATH {
        fake.quota.lock().unwrap().clone()
    } else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut resp = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        reply,
    )
        .into_response();
    if path == AUTH_PATH {
        resp.headers_mut().insert(
            header::SET_COOKIE,
            "SESSIONID=abc123; Path=/".parse().unwrap(),
        );
    }
    resp
}

/// Serve the fake on an ephemeral port and return its base URL.
pub async fn spawn(fake: Arc<FakeUpstream>) -> String {
    let app = Router::new()
        .route(AUTH_PATH, post(handle))
        .route(OFFERINGS_PATH, post(handle))
        .route(QUOTA_PATH, post(handle))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
