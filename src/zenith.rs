use chrono::{DateTime, Utc};

use crate::{
    clock::TimeState,
    coordinates::{Equatorial, GeoCoordinate},
    location::LocationProvider,
    sidereal::mean_sidereal_time,
};

/// Locates the point directly above the observer on the celestial sphere.
#[derive(Debug)]
pub struct Zenith<L> {
    provider: L,
}

impl<L: LocationProvider> Zenith<L> {
    pub fn new(provider: L) -> Self {
        Self { provider }
    }

    /// Returns the observer's position.
    ///
    /// Falls back to (0, 0) if the provider cannot report one.
    pub async fn position(&self) -> GeoCoordinate {
        match self.provider.current_position().await {
            Ok(position) => {
                if log::log_enabled!(log::Level::Debug) {
                    let (country, city) = position.country_city();
                    log::debug!("Observer at {position:?}, near {city}, {country}");
                }
                position
            }
            Err(err) => {
                log::warn!("Failed to locate observer: {err}, falling back to (0, 0)");
                GeoCoordinate::default()
            }
        }
    }

    /// Returns the equatorial coordinates of the zenith at the clock's
    /// current time.
    ///
    /// Never fails: see [`Zenith::position`].
    pub async fn locate(&self, clock: &TimeState) -> Equatorial {
        let position = self.position().await;
        zenith_of(&position, &clock.time())
    }

    /// Returns the equatorial coordinates of the zenith at `time`.
    pub async fn locate_at(&self, time: &DateTime<Utc>) -> Equatorial {
        let position = self.position().await;
        zenith_of(&position, time)
    }
}

/// Returns the zenith of an observer at `position` at `time`.
///
/// The declination equals the latitude; the right ascension is the local
/// mean sidereal time.
pub fn zenith_of(position: &GeoCoordinate, time: &DateTime<Utc>) -> Equatorial {
    Equatorial::new(mean_sidereal_time(time, position.lon), position.lat)
}
