//! Best-effort, time-bounded location read.

use std::time::Duration;

use celestial_core::location::{Coordinates, LocationError, LocationProvider};
use tracing::{debug, warn};

/// How long the probe waits by default.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(5000);

/// Reads the current position once, giving up after `timeout`.
///
/// Never fails: denial, timeout, unsupported sources, and unusable
/// coordinates all yield `None`.
pub async fn probe(provider: &dyn LocationProvider, timeout: Duration) -> Option<Coordinates> {
    let outcome = match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout(
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        )),
    };

    match outcome {
        Ok(coords) if coords.is_finite() => {
            debug!(
                latitude = coords.latitude,
                longitude = coords.longitude,
                "location probe succeeded"
            );
            Some(coords)
        }
        Ok(_) => {
            warn!("location probe returned non-finite coordinates; continuing without location");
            None
        }
        Err(error) => {
            warn!(%error, "could not get location; continuing without it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_test_support::{FailingLocator, FixedLocator, HangingLocator};

    #[tokio::test]
    async fn test_probe_returns_provider_coordinates() {
        let locator = FixedLocator(Coordinates::new(30.66, 104.06));

        let coords = probe(&locator, DEFAULT_PROBE_TIMEOUT).await;

        assert_eq!(coords, Some(Coordinates::new(30.66, 104.06)));
    }

    #[tokio::test]
    async fn test_probe_swallows_denied_permission() {
        assert_eq!(probe(&FailingLocator, DEFAULT_PROBE_TIMEOUT).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_gives_up_at_timeout() {
        let started = tokio::time::Instant::now();

        let coords = probe(&HangingLocator, DEFAULT_PROBE_TIMEOUT).await;

        assert_eq!(coords, None);
        assert!(started.elapsed() >= DEFAULT_PROBE_TIMEOUT);
    }

    #[tokio::test]
    async fn test_probe_discards_non_finite_coordinates() {
        let locator = FixedLocator(Coordinates::new(f64::NAN, 104.06));

        assert_eq!(probe(&locator, DEFAULT_PROBE_TIMEOUT).await, None);
    }
}
