//! Solar position helpers, used to build an [crate::prelude::Observation]
//! from a date and a location.

// average angle swept per day (deg)
const MEAN_DAILY_MOTION_DDEG: f64 = 0.98565327;
// Earth orbit eccentricity
const ECCENTRICITY: f64 = 0.016713;
// Earth tilt (deg)
const OBLIQUITY_DDEG: f64 = 23.45;
// value of nu on March 21st (deg)
const NU_EQUINOX_DDEG: f64 = 78.746118;
// perihelion, day of year
const PERIHELION_DAY: f64 = 2.0;

/// Solar declination (radians) for given (fractional) day of year.
/// The Earth orbit is approximated by an ellipse,
/// with perihelion on January 2nd.
pub fn solar_declination(day_of_year: f64) -> f64 {
    let mean_anomaly = (MEAN_DAILY_MOTION_DDEG * (day_of_year - PERIHELION_DAY)).to_radians();
    let tilt = OBLIQUITY_DDEG.to_radians().sin();
    (tilt * (mean_anomaly.sin() * ECCENTRICITY + mean_anomaly - NU_EQUINOX_DDEG.to_radians()).sin())
        .asin()
}

/// Local solar time (hours, within [0, 24[) at given longitude (radians, east positive)
pub fn local_solar_time(utc_hours: f64, longitude_rad: f64) -> f64 {
    let hours = (utc_hours + longitude_rad.to_degrees() / 15.0).rem_euclid(24.0);
    if hours < 24.0 {
        hours
    } else {
        // rem_euclid may round up for tiny negative values
        0.0
    }
}
