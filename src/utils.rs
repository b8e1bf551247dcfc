use chrono::{DateTime, Datelike, Timelike, Utc};

/// Wraps an angle in degrees to the range [0, 360).
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // `rem_euclid` rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Splits a UTC timestamp into calendar fields.
///
/// # Returns
///
/// `(year, month, day, hour, minute, second)`, month in 1..=12.
pub fn utc_fields(time: &DateTime<Utc>) -> (i32, u32, u32, u32, u32, u32) {
    (
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second(),
    )
}
