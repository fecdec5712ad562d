use crate::{
    coefficients::CrestCoefficients,
    error::check_local_time,
    prelude::{Coefficients, Error},
};

#[cfg(feature = "log")]
use log::{debug, trace};

// crest locations, geomagnetic ddeg
const NORTHWARD_CREST_DDEG: f64 = 16.0;
const SOUTHWARD_CREST_DDEG: f64 = -15.0;

// crest width time dependency (hours)
const NARROWEST_CREST_TIME: f64 = 14.0;
const CREST_WIDTH_TIME_SCALE: f64 = 12.0;

/// Crest half width (ddeg), within [10, 20[.
/// Crests are the narrowest at 14h local time.
pub(crate) fn half_width(local_time_hours: f64) -> f64 {
    20.0 - 10.0
        * (-(local_time_hours - NARROWEST_CREST_TIME).powi(2)
            / (2.0 * CREST_WIDTH_TIME_SCALE.powi(2)))
        .exp()
}

/// Gaussian exponent of a crest centered on `crest_ddeg`
pub(crate) fn crest_exponent(
    geomagnetic_latitude_ddeg: f64,
    crest_ddeg: f64,
    half_width: f64,
) -> f64 {
    -(geomagnetic_latitude_ddeg - crest_ddeg).powi(2) / (2.0 * half_width.powi(2))
}

/*
 * F4 evaluation, once inputs have been validated
 */
pub(crate) fn ionization_crests(
    geomagnetic_latitude_ddeg: f64,
    local_time_hours: f64,
    c: &CrestCoefficients,
) -> f64 {
    let hw = half_width(local_time_hours);
    let northward = crest_exponent(geomagnetic_latitude_ddeg, NORTHWARD_CREST_DDEG, hw);
    let southward = crest_exponent(geomagnetic_latitude_ddeg, SOUTHWARD_CREST_DDEG, hw);

    #[cfg(feature = "log")]
    trace!(
        "crests: half width {:.3}° exponents ({:.6}, {:.6})",
        hw,
        northward,
        southward
    );

    1.0 + c.northward * northward.exp() + c.southward * southward.exp()
}

/// Evaluates the ionization crests factor (F4): the two crests of the
/// equatorial ionization anomaly (16°N and 15°S geomagnetic).
/// - geomagnetic_latitude: decimal degrees
/// - local_time_hours: within [0, 24[
pub fn evaluate_ionization_crest_factor(
    geomagnetic_latitude: f64,
    local_time_hours: f64,
    coefficients: &Coefficients,
) -> Result<f64, Error> {
    check_local_time(local_time_hours)?;
    let f4 = ionization_crests(geomagnetic_latitude, local_time_hours, &coefficients.crests);

    #[cfg(feature = "log")]
    debug!(
        "F4({:.3}°, {:.2}h) = {}",
        geomagnetic_latitude,
        local_time_hours,
        f4
    );

    Ok(f4)
}
