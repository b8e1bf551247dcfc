use std::fmt;

use serde::{Serialize, Serializer};

/// A display color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from a `0xrrggbb` value.
    pub const fn hex(value: u32) -> Self {
        Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Range of B-V color index covered by [`SPECTRUM`], bluest first.
const BV_RANGE: (f64, f64) = (-0.335, 3.347);

/// Star colors ordered from blue-white (hot) to orange-red (cool).
#[rustfmt::skip]
pub const SPECTRUM: [Rgb; 101] = [
    Rgb::hex(0x9bbcff), Rgb::hex(0x9fbfff), Rgb::hex(0xa4c2ff), Rgb::hex(0xa9c5ff), Rgb::hex(0xafc9ff), Rgb::hex(0xb7ceff),
    Rgb::hex(0xbfd3ff), Rgb::hex(0xc9d9ff), Rgb::hex(0xd3e0ff), Rgb::hex(0xd7e2ff), Rgb::hex(0xd9e3ff), Rgb::hex(0xdce5ff),
    Rgb::hex(0xdee6ff), Rgb::hex(0xe0e7ff), Rgb::hex(0xe3e9ff), Rgb::hex(0xe6ebff), Rgb::hex(0xe9edff), Rgb::hex(0xebeeff),
    Rgb::hex(0xeff0ff), Rgb::hex(0xf3f2ff), Rgb::hex(0xf6f4ff), Rgb::hex(0xf9f6ff), Rgb::hex(0xfef9ff), Rgb::hex(0xfff9fd),
    Rgb::hex(0xfff6f8), Rgb::hex(0xfff5f5), Rgb::hex(0xfff4f2), Rgb::hex(0xfff2ec), Rgb::hex(0xfff0e9), Rgb::hex(0xffefe6),
    Rgb::hex(0xffece0), Rgb::hex(0xffebdc), Rgb::hex(0xffe9d9), Rgb::hex(0xffe8d5), Rgb::hex(0xffe4ce), Rgb::hex(0xffe3ca),
    Rgb::hex(0xffe1c6), Rgb::hex(0xffdfc2), Rgb::hex(0xffddbe), Rgb::hex(0xffdbba), Rgb::hex(0xffd9b6), Rgb::hex(0xffd7b1),
    Rgb::hex(0xffd5ad), Rgb::hex(0xffd3a8), Rgb::hex(0xffd1a3), Rgb::hex(0xffce9f), Rgb::hex(0xffcc99), Rgb::hex(0xffc994),
    Rgb::hex(0xffc892), Rgb::hex(0xffc78f), Rgb::hex(0xffc489), Rgb::hex(0xffc184), Rgb::hex(0xffbe7e), Rgb::hex(0xffbb78),
    Rgb::hex(0xffb975), Rgb::hex(0xffb872), Rgb::hex(0xffb46b), Rgb::hex(0xffb269), Rgb::hex(0xffb165), Rgb::hex(0xffad5e),
    Rgb::hex(0xffab5a), Rgb::hex(0xffa957), Rgb::hex(0xffa753), Rgb::hex(0xffa54f), Rgb::hex(0xffa34b), Rgb::hex(0xffa148),
    Rgb::hex(0xff9d3f), Rgb::hex(0xff9a3c), Rgb::hex(0xff9836), Rgb::hex(0xff9631), Rgb::hex(0xff932c), Rgb::hex(0xff9127),
    Rgb::hex(0xff8e21), Rgb::hex(0xff8b1a), Rgb::hex(0xff8912), Rgb::hex(0xff870a), Rgb::hex(0xff8506), Rgb::hex(0xff8300),
    Rgb::hex(0xff8100), Rgb::hex(0xff7e00), Rgb::hex(0xff7c00), Rgb::hex(0xff7a00), Rgb::hex(0xff7800), Rgb::hex(0xff7500),
    Rgb::hex(0xff7300), Rgb::hex(0xff7000), Rgb::hex(0xff6d00), Rgb::hex(0xff6b00), Rgb::hex(0xff6900), Rgb::hex(0xff6700),
    Rgb::hex(0xff6500), Rgb::hex(0xff6300), Rgb::hex(0xff6000), Rgb::hex(0xff5d00), Rgb::hex(0xff5b00), Rgb::hex(0xff5900),
    Rgb::hex(0xff5600), Rgb::hex(0xff5300), Rgb::hex(0xff4f00), Rgb::hex(0xff4b00), Rgb::hex(0xff4700),
];

/// Returns the spectrum entry at `index`.
pub fn spectrum_color(index: usize) -> Option<Rgb> {
    SPECTRUM.get(index).copied()
}

/// Returns the display color of a star with the given B-V color index.
///
/// The index range is split into equal buckets, one per spectrum entry.
/// Values outside the range are clamped to the first or last entry.
pub fn star_color(bv: f64) -> Rgb {
    let (min, max) = BV_RANGE;
    if bv.is_nan() {
        return SPECTRUM[0];
    }
    let t = (bv - min) / (max - min);
    let index = (t * SPECTRUM.len() as f64).floor();
    SPECTRUM[index.clamp(0.0, (SPECTRUM.len() - 1) as f64) as usize]
}
