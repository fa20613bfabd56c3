#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use qoratosh_admin::{
    config::{AppConfig, ToursBackend},
    routes::create_routes,
    state::AppState,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::MockServer;

pub const USER: &str = "admin";
pub const PASS: &str = "secret";
pub const SESSION: &str = "qa_session=active";

/// Router wired to a mock public site and a mock Telegram API.
pub struct TestApp {
    pub router: Router,
    pub upstream: MockServer,
    pub data: TempDir,
}

pub fn config(upstream: &MockServer, data: &TempDir) -> AppConfig {
    AppConfig {
        admin_user: USER.to_string(),
        admin_pass: PASS.to_string(),
        site_api_base: upstream.uri(),
        site_admin_user: USER.to_string(),
        site_admin_pass: PASS.to_string(),
        tours_backend: ToursBackend::Remote,
        database_url: format!("sqlite://{}", data.path().join("tours.sqlite").display()),
        data_dir: data.path().to_path_buf(),
        upload_dir: data.path().join("uploads"),
        telegram_api_base: upstream.uri(),
        http_timeout: Duration::from_secs(5),
        port: 0,
    }
}

pub async fn spawn_app() -> TestApp {
    let upstream = MockServer::start().await;
    let data = tempfile::tempdir().unwrap();
    let state = AppState::from_config(config(&upstream, &data)).await.unwrap();

    TestApp {
        router: create_routes(state),
        upstream,
        data,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(authed("GET", uri).body(Body::empty()).unwrap()).await
    }

    pub async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = authed(method, uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}

pub fn authed(method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, SESSION)
}
