//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use celestial_core::clock::Clock;
use celestial_core::gateway::NarrativeGateway;
use celestial_core::location::{Coordinates, LocationProvider};
use celestial_test_support::{CannedGateway, FixedClock, FixedLocator, valid_report_json};
use http_body_util::BodyExt;
use tower::ServiceExt;

use celestial_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router with a canned oracle report and a fixed
/// server-side location. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with(
        Arc::new(CannedGateway::json(&valid_report_json())),
        Arc::new(FixedLocator(Coordinates::new(30.66, 104.06))),
    )
}

/// Build the full app router around the given boundaries.
pub fn build_test_app_with(
    gateway: Arc<dyn NarrativeGateway>,
    locator: Arc<dyn LocationProvider>,
) -> Router {
    let app_state = AppState::new(fixed_clock(), locator, gateway, Duration::from_millis(50));
    celestial_api::app(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}
