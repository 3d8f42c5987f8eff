//! Command handlers for the reading orchestration context.
//!
//! One handler runs a whole reading cycle: validate the profile, probe the
//! location, then request the report with the offline fallback behind it.

use std::time::Duration;

use celestial_core::clock::Clock;
use celestial_core::command::Command;
use celestial_core::error::DomainError;
use celestial_core::gateway::NarrativeGateway;
use celestial_core::location::LocationProvider;
use tracing::{info, instrument};

use crate::application::location_probe::probe;
use crate::application::requester::analyze_or_simulate;
use crate::domain::commands::AnalyzeProfile;
use crate::domain::reading::Reading;

/// Handles the `AnalyzeProfile` command.
///
/// The probe always finishes before the narrative request starts. Boundary
/// failures never surface here; they resolve to the offline report.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the profile lacks a name or birth
/// date.
#[instrument(
    skip_all,
    fields(command_type = command.command_type(), correlation_id = %command.correlation_id)
)]
pub async fn handle_analyze_profile(
    command: &AnalyzeProfile,
    clock: &dyn Clock,
    locator: &dyn LocationProvider,
    gateway: &dyn NarrativeGateway,
    probe_timeout: Duration,
) -> Result<Reading, DomainError> {
    command.profile.validate()?;

    let location = match &command.profile.location {
        Some(supplied) if supplied.is_finite() => Some(supplied.clone()),
        _ => probe(locator, probe_timeout).await,
    };
    let profile = command.profile.clone().with_location(location);

    let (report, source) = analyze_or_simulate(&profile, clock, gateway).await;
    info!(?source, "reading cycle complete");

    Ok(Reading {
        profile,
        report,
        source,
    })
}
