use std::sync::LazyLock;

use reverse_geocoder::ReverseGeocoder;
use serde::{Deserialize, Serialize};

/// Reverse geocoder instance used to convert coordinates to location names.
static GEOCODER: LazyLock<ReverseGeocoder> = LazyLock::new(ReverseGeocoder::new);

/// A position on the Earth's surface in geographic coordinates.
#[derive(Clone, Copy, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        debug_assert!((-90.0..=90.0).contains(&lat));
        debug_assert!((-180.0..=180.0).contains(&lon));
        GeoCoordinate { lat, lon }
    }

    /// Creates a `GeoCoordinate` if both components are within range.
    pub fn checked(lat: f64, lon: f64) -> Option<Self> {
        let coordinate = GeoCoordinate { lat, lon };
        coordinate.is_valid().then_some(coordinate)
    }

    /// Returns `true` if latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Returns the country and city name closest to the position.
    pub fn country_city(&self) -> (String, String) {
        let record = GEOCODER.search((self.lat, self.lon)).record;
        let city = &record.name;
        let country = match isocountry::CountryCode::for_alpha2(&record.cc) {
            Ok(code) => code.name(),
            Err(_) => "Unknown",
        };
        (country.to_owned(), city.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(GeoCoordinate::checked(91.0, 0.0).is_none());
        assert!(GeoCoordinate::checked(0.0, -180.5).is_none());
        assert!(GeoCoordinate::checked(f64::NAN, 0.0).is_none());
        assert_eq!(
            GeoCoordinate::checked(-33.9, 151.2),
            Some(GeoCoordinate::new(-33.9, 151.2))
        );
    }

    #[test]
    fn deserialize_from_toml() {
        let position: GeoCoordinate = toml::from_str("lat = 48.85\nlon = 2.35").unwrap();
        assert_eq!(position, GeoCoordinate::new(48.85, 2.35));
    }
}
