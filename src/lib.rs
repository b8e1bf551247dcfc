//! Astronomical helpers for a sky chart: view rotation, sidereal time, the
//! observer's zenith, and the star and constellation datasets.

pub mod app;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod coordinates;
pub mod frame;
pub mod location;
pub mod rotation;
pub mod sidereal;
pub mod spectrum;
pub mod utils;
pub mod zenith;
