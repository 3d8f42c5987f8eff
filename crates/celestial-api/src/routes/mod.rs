//! Route modules, one per front-end concern.

pub mod health;
pub mod intake;
pub mod readings;

#[cfg(test)]
pub(crate) fn test_state_with(
    gateway: std::sync::Arc<dyn celestial_core::gateway::NarrativeGateway>,
    locator: std::sync::Arc<dyn celestial_core::location::LocationProvider>,
) -> crate::state::AppState {
    use celestial_oracle::application::location_probe::DEFAULT_PROBE_TIMEOUT;
    use celestial_test_support::FixedClock;
    use chrono::{TimeZone, Utc};

    let clock = std::sync::Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ));
    crate::state::AppState::new(clock, locator, gateway, DEFAULT_PROBE_TIMEOUT)
}

#[cfg(test)]
pub(crate) fn test_state() -> crate::state::AppState {
    use celestial_test_support::{EmptyGateway, FailingLocator};

    test_state_with(
        std::sync::Arc::new(EmptyGateway),
        std::sync::Arc::new(FailingLocator),
    )
}
