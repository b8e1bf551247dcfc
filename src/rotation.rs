use crate::{
    coordinates::{Equatorial, EulerAngle},
    frame::ReferenceFrame,
};

/// Returns the rotation that brings the given coordinate to the center of
/// the view.
///
/// # Arguments
///
/// * `frame` - The reference frame to rotate from.
/// * `coords` - `[latitude, longitude, orientation]` in degrees. Missing
///   longitude or orientation count as 0, and so does a NaN orientation.
///
/// # Returns
///
/// `[roll - lat, pitch - lon, yaw + orientation]` relative to `frame`, or a
/// zero rotation if `coords` is absent or empty.
pub fn rotation_angles(frame: &ReferenceFrame, coords: Option<&[f64]>) -> EulerAngle {
    let Some(coords) = coords.filter(|coords| !coords.is_empty()) else {
        return EulerAngle::ZERO;
    };

    let lat = coords[0];
    let lon = coords.get(1).copied().unwrap_or(0.0);
    let orientation = coords
        .get(2)
        .copied()
        .filter(|orientation| !orientation.is_nan())
        .unwrap_or(0.0);

    let origin = frame.origin();
    EulerAngle::new(
        origin.roll() - lat,
        origin.pitch() - lon,
        origin.yaw() + orientation,
    )
}

/// Returns the rotation that centers the view on an equatorial position.
pub fn center_on(frame: &ReferenceFrame, position: &Equatorial, orientation: f64) -> EulerAngle {
    rotation_angles(frame, Some(&[position.dec, position.ra, orientation]))
}
