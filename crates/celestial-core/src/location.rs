//! Location boundary contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographic position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// City name, when the provider knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Coordinates {
    /// Creates coordinates without a city.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: None,
        }
    }

    /// Whether both components are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Why a location read produced nothing.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The user or platform refused access.
    #[error("location permission denied")]
    Denied,

    /// No location source is configured.
    #[error("location lookup unsupported")]
    Unsupported,

    /// The read did not finish in time.
    #[error("location lookup timed out after {0} ms")]
    Timeout(u64),

    /// The source answered but with an error or unusable data.
    #[error("location lookup failed: {0}")]
    Unavailable(String),
}

/// A source of the current position. One call is one best-effort read.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Reads the current position once. Implementations must not retry.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}
