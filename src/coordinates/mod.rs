mod equatorial;
mod euler;
mod geo;

pub use equatorial::{Ecliptic, Equatorial};
pub use euler::EulerAngle;
pub use geo::GeoCoordinate;
