//! Mean sidereal time.
//!
//! Relates an observer's longitude to the right ascension currently on the
//! local meridian.

use chrono::{DateTime, Utc};

use crate::utils::{utc_fields, wrap_degrees};

/// Days in a Julian century.
const JULIAN_CENTURY: f64 = 36525.0;

// Mean sidereal time coefficients (in degrees)
const MST_MEAN: f64 = 280.46061837;
const MST_ADVANCE: f64 = 360.98564736629;
const T2_COEFF: f64 = 0.000387933;
const T3_DIVISOR: f64 = 38710000.0;

/// Returns the days elapsed since the J2000.0 epoch (2000-01-01 12:00 UTC).
///
/// Seconds are truncated; sub-second precision is ignored.
pub fn days_since_j2000(time: &DateTime<Utc>) -> f64 {
    let (mut year, mut month, day, hour, minute, second) = utc_fields(time);

    // January and February count as months 13 and 14 of the previous year.
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let year = year as f64;
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let c = (365.25 * year).floor();
    let d = (30.6001 * (month as f64 + 1.0)).floor();

    let day_fraction = (hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0) / 24.0;
    b + c + d - 730550.5 + day as f64 + day_fraction
}

/// Calculates the mean sidereal time in degrees.
///
/// # Arguments
///
/// * `time` - The UTC timestamp.
/// * `lon` - Observer longitude in degrees, positive east.
///
/// # Returns
///
/// The local mean sidereal time in degrees, normalized to [0, 360).
pub fn mean_sidereal_time(time: &DateTime<Utc>, lon: f64) -> f64 {
    let jd = days_since_j2000(time);
    let jt = jd / JULIAN_CENTURY;

    let mst = MST_MEAN + MST_ADVANCE * jd + T2_COEFF * jt.powi(2) - jt.powi(3) / T3_DIVISOR + lon;

    wrap_degrees(mst)
}

/// Calculates the Greenwich mean sidereal time in degrees, [0, 360).
pub fn greenwich_mean_sidereal_time(time: &DateTime<Utc>) -> f64 {
    mean_sidereal_time(time, 0.0)
}
