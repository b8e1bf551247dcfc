//! Sources of the observer's geographic position.

mod fixed;
mod ip;

use thiserror::Error;

use crate::coordinates::GeoCoordinate;

pub use fixed::FixedLocation;
pub use ip::{DEFAULT_ENDPOINT, IpLocation};

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("location request timed out")]
    Timeout,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// A capability that reports the observer's current position.
///
/// Each call is a single-shot request.
pub trait LocationProvider {
    fn current_position(&self)
    -> impl Future<Output = Result<GeoCoordinate, LocationError>> + Send;
}

/// The location provider selected by configuration.
#[derive(Debug)]
pub enum LocationSource {
    Fixed(FixedLocation),
    Ip(IpLocation),
}

impl LocationProvider for LocationSource {
    async fn current_position(&self) -> Result<GeoCoordinate, LocationError> {
        match self {
            LocationSource::Fixed(provider) => provider.current_position().await,
            LocationSource::Ip(provider) => provider.current_position().await,
        }
    }
}

impl From<FixedLocation> for LocationSource {
    fn from(provider: FixedLocation) -> Self {
        LocationSource::Fixed(provider)
    }
}

impl From<IpLocation> for LocationSource {
    fn from(provider: IpLocation) -> Self {
        LocationSource::Ip(provider)
    }
}
