//! Routes for the reading cycle and the report presenter.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use celestial_core::location::Coordinates;
use celestial_core::profile::Profile;
use celestial_oracle::application::command_handlers;
use celestial_oracle::domain::commands::AnalyzeProfile;
use celestial_oracle::domain::reading::Reading;
use celestial_oracle::domain::report::{AnalysisResult, LuckScope};
use celestial_report::domain::elements::Element;
use celestial_report::domain::presenter::PresenterState;
use celestial_report::domain::view::{ReportView, render};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for POST /.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingResponse {
    /// Identifies this cycle in the logs.
    pub correlation_id: Uuid,
    /// Profile, report, and report source.
    #[serde(flatten)]
    pub reading: Reading,
}

/// Request body for POST /view.
#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    /// The report to project.
    pub report: AnalysisResult,
    /// Location the reading was made for.
    #[serde(default)]
    pub location: Option<Coordinates>,
    /// Selected time scope; day when absent.
    #[serde(default)]
    pub tab: LuckScope,
    /// Hovered element, if any.
    #[serde(default)]
    pub hovered_element: Option<Element>,
    /// Zero-based index of the open action in the selected scope.
    #[serde(default)]
    pub open_action: Option<usize>,
}

/// POST /
///
/// Runs one full reading cycle for the submitted profile. A `location` in
/// the body is used as-is; otherwise the server-side locator is probed.
#[instrument(skip_all)]
async fn create_reading(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<ReadingResponse>, ApiError> {
    let command = AnalyzeProfile {
        correlation_id: Uuid::new_v4(),
        profile,
    };

    info!(correlation_id = %command.correlation_id, "handling analyze_profile command");

    let reading = command_handlers::handle_analyze_profile(
        &command,
        state.clock.as_ref(),
        state.locator.as_ref(),
        state.gateway.as_ref(),
        state.probe_timeout,
    )
    .await?;

    Ok(Json(ReadingResponse {
        correlation_id: command.correlation_id,
        reading,
    }))
}

/// POST /view
///
/// Rejects a report that breaks the three-actions-per-scope shape.
#[instrument(skip_all, fields(tab = ?request.tab))]
async fn view_reading(Json(request): Json<ViewRequest>) -> Result<Json<ReportView>, ApiError> {
    request.report.validate()?;

    let mut presenter = PresenterState::new();
    presenter.select_tab(request.tab);
    if let Some(element) = request.hovered_element {
        presenter.hover(element);
    }
    if let Some(index) = request.open_action {
        presenter.open(&request.report, index);
    }

    Ok(Json(render(
        &request.report,
        request.location.as_ref(),
        &presenter,
    )))
}

/// Returns the router for readings.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reading))
        .route("/view", post(view_reading))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use celestial_core::gateway::NarrativeGateway;
    use celestial_test_support::{CannedGateway, FailingGateway, FixedLocator, valid_report_json};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::{test_state, test_state_with};

    async fn post(state: AppState, uri: &str, body: &Value) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn profile_body() -> Value {
        serde_json::json!({ "name": "晓", "birthDate": "1990-05-01", "birthTime": "08:30" })
    }

    #[tokio::test]
    async fn test_create_reading_returns_oracle_report() {
        // Arrange
        let gateway: Arc<dyn NarrativeGateway> =
            Arc::new(CannedGateway::json(&valid_report_json()));
        let locator = Arc::new(FixedLocator(Coordinates::new(30.66, 104.06)));
        let state = test_state_with(gateway, locator);

        // Act
        let (status, json) = post(state, "/", &profile_body()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["source"], "oracle");
        assert_eq!(json["report"]["zodiac"], "金牛座");
        assert_eq!(json["profile"]["location"]["latitude"], 30.66);
        Uuid::parse_str(json["correlationId"].as_str().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn test_create_reading_falls_back_when_gateway_fails() {
        let state = test_state_with(
            Arc::new(FailingGateway::new()),
            Arc::new(FixedLocator(Coordinates::new(1.0, 2.0))),
        );

        let (status, json) = post(state, "/", &profile_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["report"]["zodiac"], "银河守护者");
        assert_eq!(
            json["report"]["dailyLuck"]["actions"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn test_create_reading_returns_400_for_empty_name() {
        let body = serde_json::json!({ "name": "", "birthDate": "1990-05-01" });

        let (status, json) = post(test_state(), "/", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_create_reading_accepts_whitespace_name() {
        let body = serde_json::json!({ "name": " ", "birthDate": "1990-05-01" });

        let (status, json) = post(test_state(), "/", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["profile"]["name"], " ");
    }

    #[tokio::test]
    async fn test_create_reading_returns_422_for_missing_fields() {
        let (status, _) = post(test_state(), "/", &serde_json::json!({})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_view_projects_selected_tab_and_open_action() {
        // Arrange
        let body = serde_json::json!({
            "report": valid_report_json(),
            "tab": "week",
            "hovered_element": "water",
            "open_action": 1
        });

        // Act
        let (status, json) = post(test_state(), "/view", &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["luck"]["label"], "本周");
        assert_eq!(json["detail"]["title"], "本周行动二");
        assert_eq!(json["element_caption"], "💧 智慧、灵动、深邃");
        assert_eq!(json["location"]["is_default"], true);
    }

    #[tokio::test]
    async fn test_view_ignores_out_of_range_action() {
        let body = serde_json::json!({ "report": valid_report_json(), "open_action": 7 });

        let (status, json) = post(test_state(), "/view", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["luck"]["label"], "今日");
        assert!(json.get("detail").is_none());
    }

    #[tokio::test]
    async fn test_view_rejects_incomplete_report() {
        let mut report = valid_report_json();
        report.as_object_mut().unwrap().remove("harmonyScore");

        let body = serde_json::json!({ "report": report });

        let (status, _) = post(test_state(), "/view", &body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_view_returns_400_for_report_with_two_actions() {
        let mut report = valid_report_json();
        report["weeklyLuck"]["actions"]
            .as_array_mut()
            .unwrap()
            .pop();

        let body = serde_json::json!({ "report": report });

        let (status, json) = post(test_state(), "/view", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }
}
