use nalgebra::{Rotation3, Vector3};
use serde::Serialize;

use crate::utils::wrap_degrees;

/// A position on the celestial sphere in equatorial coordinates.
#[derive(Clone, Copy, PartialEq, Default, Debug, Serialize)]
pub struct Equatorial {
    /// Right ascension in degrees, [0, 360).
    pub ra: f64,
    /// Declination in degrees, [-90, 90].
    pub dec: f64,
}

/// A position on the celestial sphere in ecliptic coordinates.
#[derive(Clone, Copy, PartialEq, Default, Debug, Serialize)]
pub struct Ecliptic {
    /// Ecliptic longitude in degrees, [0, 360).
    pub lon: f64,
    /// Ecliptic latitude in degrees, [-90, 90].
    pub lat: f64,
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64) -> Self {
        Equatorial { ra, dec }
    }

    /// Converts the position to ecliptic coordinates.
    ///
    /// # Arguments
    ///
    /// * `obliquity` - Obliquity of the ecliptic in degrees.
    pub fn to_ecliptic(&self, obliquity: f64) -> Ecliptic {
        let (ra, dec) = (self.ra.to_radians(), self.dec.to_radians());
        let direction = Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin());

        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), -obliquity.to_radians());
        let ecliptic = rotation * direction;

        Ecliptic {
            lon: wrap_degrees(ecliptic.y.atan2(ecliptic.x).to_degrees()),
            lat: ecliptic.z.clamp(-1.0, 1.0).asin().to_degrees(),
        }
    }
}
