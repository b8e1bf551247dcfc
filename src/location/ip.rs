use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::coordinates::GeoCoordinate;

use super::{LocationError, LocationProvider};

/// The default IP geolocation endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";

/// Locates the observer from the public IP address of the machine.
#[derive(Clone, Debug)]
pub struct IpLocation {
    client: reqwest::Client,
    endpoint: String,
}

/// Response body of the geolocation endpoint.
#[derive(Deserialize)]
struct Response {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpLocation {
    /// Creates a new `IpLocation`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL answering with `{status, lat, lon}` JSON.
    /// * `timeout` - Timeout of a single request.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn request(&self) -> Result<Response, reqwest::Error> {
        self.client
            .get(&self.endpoint)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

impl LocationProvider for IpLocation {
    async fn current_position(&self) -> Result<GeoCoordinate, LocationError> {
        let response = self.request().await.map_err(classify)?;

        if response.status != "success" {
            return Err(LocationError::Unavailable(
                response
                    .message
                    .unwrap_or_else(|| format!("status `{}`", response.status)),
            ));
        }

        let (Some(lat), Some(lon)) = (response.lat, response.lon) else {
            return Err(LocationError::Unavailable(
                "response is missing coordinates".to_owned(),
            ));
        };
        GeoCoordinate::checked(lat, lon).ok_or_else(|| {
            LocationError::Unavailable(format!("coordinates out of range: ({lat}, {lon})"))
        })
    }
}

/// Maps an HTTP failure to a location error.
fn classify(err: reqwest::Error) -> LocationError {
    if err.is_timeout() {
        return LocationError::Timeout;
    }
    match err.status() {
        Some(status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)) => {
            LocationError::PermissionDenied(status.to_string())
        }
        _ => LocationError::Unavailable(err.to_string()),
    }
}
