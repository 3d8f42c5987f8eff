//! Narrative requester: asks the generative boundary for a report and
//! accepts only a complete, schema-valid answer.

use celestial_core::clock::Clock;
use celestial_core::gateway::{BoundaryError, GenerationRequest, JSON_MIME_TYPE, NarrativeGateway};
use celestial_core::profile::Profile;
use serde_json::error::Category;
use tracing::{error, info};

use crate::domain::fallback::simulate;
use crate::domain::prompt::build_prompt;
use crate::domain::reading::ReportSource;
use crate::domain::report::AnalysisResult;
use crate::domain::schema::{SYSTEM_INSTRUCTION, response_schema};

/// Builds the boundary request for `profile` at `clock`'s current time.
#[must_use]
pub fn build_request(profile: &Profile, clock: &dyn Clock) -> GenerationRequest {
    GenerationRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_owned(),
        prompt: build_prompt(profile, clock.now()),
        response_schema: response_schema(),
        response_mime_type: JSON_MIME_TYPE.to_owned(),
    }
}

/// Parses raw boundary text into a validated report.
///
/// # Errors
///
/// - `BoundaryError::EmptyResponse` for blank text.
/// - `BoundaryError::Malformed` when the text is not JSON.
/// - `BoundaryError::SchemaViolation` for missing fields, wrong types, or a
///   broken report invariant.
pub fn parse_report(raw: &str) -> Result<AnalysisResult, BoundaryError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(BoundaryError::EmptyResponse);
    }

    let report: AnalysisResult = serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Data => BoundaryError::SchemaViolation(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => BoundaryError::Malformed(e.to_string()),
    })?;

    report
        .validate()
        .map_err(|e| BoundaryError::SchemaViolation(e.to_string()))?;

    Ok(report)
}

/// Requests a report from the boundary. One attempt, no retries.
///
/// # Errors
///
/// Returns any `BoundaryError` from the gateway or from `parse_report`.
pub async fn request_analysis(
    profile: &Profile,
    clock: &dyn Clock,
    gateway: &dyn NarrativeGateway,
) -> Result<AnalysisResult, BoundaryError> {
    let request = build_request(profile, clock);
    let raw = gateway.generate(&request).await?;
    parse_report(&raw)
}

/// Requests a report and substitutes the deterministic fallback on any
/// boundary failure. Never fails.
pub async fn analyze_or_simulate(
    profile: &Profile,
    clock: &dyn Clock,
    gateway: &dyn NarrativeGateway,
) -> (AnalysisResult, ReportSource) {
    match request_analysis(profile, clock, gateway).await {
        Ok(report) => {
            info!("narrative service produced the report");
            (report, ReportSource::Oracle)
        }
        Err(err) => {
            error!(error = %err, "narrative analysis failed; using offline report");
            (simulate(profile), ReportSource::Fallback)
        }
    }
}
