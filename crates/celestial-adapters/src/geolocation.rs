//! Location providers for processes without a device position.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use celestial_core::location::{Coordinates, LocationError, LocationProvider};

#[derive(Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    city: Option<String>,
}

impl LookupResponse {
    fn into_coordinates(self) -> Result<Coordinates, LocationError> {
        if self.status != "success" {
            return Err(LocationError::Unavailable(
                self.message.unwrap_or(self.status),
            ));
        }
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
                city: self.city.filter(|c| !c.is_empty()),
            }),
            _ => Err(LocationError::Unavailable(
                "response carried no coordinates".to_owned(),
            )),
        }
    }
}

/// Approximates the position from the caller's public IP address.
///
/// Expects a JSON body of the form `{ "status", "lat", "lon", "city" }`.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: Client,
    url: String,
}

impl IpGeolocator {
    /// Creates a locator that queries `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl LocationProvider for IpGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        debug!(url = %self.url, "looking up position");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Unavailable(format!("HTTP {status}")));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;
        body.into_coordinates()
    }
}

/// Used when no lookup URL is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLocator;

#[async_trait]
impl LocationProvider for DisabledLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}
