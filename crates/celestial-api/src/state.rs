//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use celestial_core::clock::Clock;
use celestial_core::gateway::NarrativeGateway;
use celestial_core::location::LocationProvider;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for prompt timestamps.
    pub clock: Arc<dyn Clock>,
    /// Server-side location source, used when a request carries none.
    pub locator: Arc<dyn LocationProvider>,
    /// Generative narrative service.
    pub gateway: Arc<dyn NarrativeGateway>,
    /// Upper bound on one location read.
    pub probe_timeout: Duration,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        locator: Arc<dyn LocationProvider>,
        gateway: Arc<dyn NarrativeGateway>,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            clock,
            locator,
            gateway,
            probe_timeout,
        }
    }
}
