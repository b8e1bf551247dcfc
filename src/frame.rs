use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::coordinates::EulerAngle;

/// Obliquity of the ecliptic at J2000.0, in degrees.
pub const OBLIQUITY_J2000: f64 = 23.4393;

/// Kinds of reference frame a view can be rotated from.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[derive(Display, EnumString, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FrameKind {
    #[default]
    Equatorial,
    Ecliptic,
}

/// A fixed reference frame.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ReferenceFrame {
    kind: FrameKind,
    origin: EulerAngle,
    obliquity: f64,
}

impl ReferenceFrame {
    /// Creates the frame of the given kind.
    pub fn new(kind: FrameKind) -> Self {
        let origin = match kind {
            FrameKind::Equatorial => EulerAngle::ZERO,
            FrameKind::Ecliptic => EulerAngle::new(0.0, 0.0, OBLIQUITY_J2000),
        };
        Self {
            kind,
            origin,
            obliquity: OBLIQUITY_J2000,
        }
    }

    /// The zero-rotation equatorial frame.
    pub fn equatorial() -> Self {
        Self::new(FrameKind::Equatorial)
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Returns the rotation of the frame itself.
    pub fn origin(&self) -> EulerAngle {
        self.origin
    }

    /// Returns the obliquity of the ecliptic in degrees.
    pub fn obliquity(&self) -> f64 {
        self.obliquity
    }
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self::equatorial()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn equatorial_is_zero_rotation() {
        assert_eq!(ReferenceFrame::equatorial().origin(), EulerAngle::ZERO);
        assert_eq!(ReferenceFrame::default().kind(), FrameKind::Equatorial);
    }

    #[test]
    fn ecliptic_is_tilted_by_obliquity() {
        let frame = ReferenceFrame::new(FrameKind::Ecliptic);
        assert_eq!(frame.origin(), EulerAngle::new(0.0, 0.0, 23.4393));
    }

    #[test]
    fn every_frame_carries_obliquity() {
        for kind in FrameKind::iter() {
            assert_eq!(ReferenceFrame::new(kind).obliquity(), OBLIQUITY_J2000);
        }
    }

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!("ecliptic".parse::<FrameKind>().unwrap(), FrameKind::Ecliptic);
        assert_eq!(FrameKind::Equatorial.to_string(), "equatorial");
    }
}
