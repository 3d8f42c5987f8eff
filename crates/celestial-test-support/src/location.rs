//! Test locators — mock `LocationProvider` implementations for tests.

use async_trait::async_trait;
use celestial_core::location::{Coordinates, LocationError, LocationProvider};

/// A locator that always reports the same position.
#[derive(Debug, Clone)]
pub struct FixedLocator(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0.clone())
    }
}

/// A locator whose permission is always denied.
#[derive(Debug)]
pub struct FailingLocator;

#[async_trait]
impl LocationProvider for FailingLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Denied)
    }
}

/// A locator that never answers. Pair with a paused tokio clock to exercise
/// the probe timeout without waiting in real time.
#[derive(Debug)]
pub struct HangingLocator;

#[async_trait]
impl LocationProvider for HangingLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        std::future::pending().await
    }
}
