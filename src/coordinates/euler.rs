use nalgebra::Rotation3;
use serde::Serialize;

/// Rotation about three fixed reference axes, in degrees.
///
/// The order is `[roll, pitch, yaw]`.
#[derive(Clone, Copy, PartialEq, Default, Debug, Serialize)]
#[serde(transparent)]
pub struct EulerAngle(pub [f64; 3]);

impl EulerAngle {
    pub const ZERO: Self = EulerAngle([0.0; 3]);

    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        EulerAngle([roll, pitch, yaw])
    }

    pub fn roll(&self) -> f64 {
        self.0[0]
    }

    pub fn pitch(&self) -> f64 {
        self.0[1]
    }

    pub fn yaw(&self) -> f64 {
        self.0[2]
    }

    /// Returns the rotation matrix described by the angles.
    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(
            self.roll().to_radians(),
            self.pitch().to_radians(),
            self.yaw().to_radians(),
        )
    }
}

impl From<[f64; 3]> for EulerAngle {
    fn from(angles: [f64; 3]) -> Self {
        EulerAngle(angles)
    }
}
