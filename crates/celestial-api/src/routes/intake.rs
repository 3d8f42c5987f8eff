//! Routes for the input collector.
//!
//! The server keeps no wizard state. Each call carries a snapshot, applies
//! one transition, and returns the resulting snapshot.

use axum::{Json, Router, routing::post};
use celestial_core::profile::Profile;
use celestial_intake::domain::steps::IntakeStep;
use celestial_intake::domain::wizard::{Advance, IntakeWizard, ProfileDraft};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::state::AppState;

/// A wizard snapshot as sent by the client.
#[derive(Debug, Deserialize)]
pub struct WizardSnapshot {
    /// Current step, 1 to 3.
    pub step: IntakeStep,
    /// Fields entered so far.
    #[serde(default)]
    pub draft: ProfileDraft,
}

/// Copy shown for a step.
#[derive(Debug, Serialize)]
pub struct StepPrompt {
    /// Step heading.
    pub title: &'static str,
    /// Line under the heading.
    pub subtitle: &'static str,
    /// Label of the advance control.
    pub advance_label: &'static str,
}

impl From<IntakeStep> for StepPrompt {
    fn from(step: IntakeStep) -> Self {
        Self {
            title: step.title(),
            subtitle: step.subtitle(),
            advance_label: step.advance_label(),
        }
    }
}

/// Which way an advance went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceOutcome {
    /// Moved to the next step.
    Moved,
    /// Required field blank; step unchanged.
    Blocked,
    /// Profile submitted from the last step.
    Submitted,
    /// Nothing left to do.
    Finished,
}

/// Response body for POST /advance.
#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    /// Outcome of the transition.
    pub outcome: AdvanceOutcome,
    /// Step after the transition.
    pub step: IntakeStep,
    /// Fields, unchanged by the transition.
    pub draft: ProfileDraft,
    /// Copy for `step`.
    pub prompt: StepPrompt,
    /// The submitted profile, on `submitted` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Response body for POST /retreat.
#[derive(Debug, Serialize)]
pub struct RetreatResponse {
    /// Step after the transition.
    pub step: IntakeStep,
    /// Fields, unchanged by the transition.
    pub draft: ProfileDraft,
    /// Copy for `step`.
    pub prompt: StepPrompt,
}

/// POST /advance
#[instrument(skip_all, fields(step = snapshot.step.number()))]
async fn advance(Json(snapshot): Json<WizardSnapshot>) -> Json<AdvanceResponse> {
    let mut wizard = IntakeWizard::resume(snapshot.step, snapshot.draft);

    let (outcome, profile) = match wizard.advance() {
        Advance::Moved(_) => (AdvanceOutcome::Moved, None),
        Advance::Blocked(_) => (AdvanceOutcome::Blocked, None),
        Advance::Submitted(profile) => (AdvanceOutcome::Submitted, Some(profile)),
        Advance::Finished => (AdvanceOutcome::Finished, None),
    };
    debug!(?outcome, "wizard advanced");

    let step = wizard.step();
    Json(AdvanceResponse {
        outcome,
        step,
        draft: wizard.draft().clone(),
        prompt: step.into(),
        profile,
    })
}

/// POST /retreat
#[instrument(skip_all, fields(step = snapshot.step.number()))]
async fn retreat(Json(snapshot): Json<WizardSnapshot>) -> Json<RetreatResponse> {
    let mut wizard = IntakeWizard::resume(snapshot.step, snapshot.draft);
    let step = wizard.retreat();

    Json(RetreatResponse {
        step,
        draft: wizard.draft().clone(),
        prompt: step.into(),
    })
}

/// Returns the router for the input collector.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advance", post(advance))
        .route("/retreat", post(retreat))
}
