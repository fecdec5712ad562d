//! Degrees and minutes conversions.
//! Minutes carry the same sign as degrees: 10°30'S is (-10, -30.0).
use dms_coordinates::{Cardinal, DMS};

/// Converts (degrees, minutes) to radians
pub fn from_degrees_minutes(degrees: i32, minutes: f64) -> f64 {
    let cardinal = if degrees < 0 || (degrees == 0 && minutes < 0.0) {
        Cardinal::South
    } else {
        Cardinal::North
    };
    DMS::new(
        degrees.unsigned_abs() as u16,
        0,
        minutes.abs() * 60.0,
        Some(cardinal),
    )
    .to_radians()
}

/// Converts radians to (whole degrees, minutes).
/// Degrees are truncated toward zero, minutes hold the signed remainder.
pub fn to_degrees_minutes(radians: f64) -> (i32, f64) {
    let ddeg = radians.to_degrees();
    let dms = DMS::from_ddeg_angle(ddeg);
    let minutes = dms.minutes as f64 + dms.seconds / 60.0;
    if ddeg < 0.0 {
        (-(dms.degrees as i32), -minutes)
    } else {
        (dms.degrees as i32, minutes)
    }
}
