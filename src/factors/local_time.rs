use crate::{
    coefficients::LocalTimeCoefficients,
    error::{check_day_of_year, check_local_time},
    prelude::{Coefficients, Error},
};

#[cfg(feature = "log")]
use log::{debug, error, trace};

use std::f64::consts::{PI, TAU};

// diurnal maximum, in hours
const DIURNAL_PHASE_SHIFT: f64 = 14.0;
// PF1
const ZENITH_CORRECTION: f64 = 0.4;
// day of year of the northern summer solstice
const SOLSTICE_DAY: f64 = 181.0;
const TROPICAL_YEAR_DAYS: f64 = 365.25;
// bite-out onset (hours) and its seasonal excursion (hours)
const BITE_OUT_ONSET: f64 = 13.0;
const BITE_OUT_ONSET_EXCURSION: f64 = 1.5;
// bite-out latitude envelope: center and half width (ddeg)
const BITE_OUT_LATITUDE_DDEG: f64 = 45.0;
const BITE_OUT_LATITUDE_WIDTH_DDEG: f64 = 14.0;
// bite-out time envelope half width (hours)
const BITE_OUT_TIME_WIDTH: f64 = 3.0;

/// Diurnal, semi-diurnal and ter-diurnal phases (radians)
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct HarmonicPhases {
    pub diurnal: f64,
    pub semi_diurnal: f64,
    pub ter_diurnal: f64,
}

impl HarmonicPhases {
    pub fn new(local_time_hours: f64) -> Self {
        Self {
            diurnal: TAU * (local_time_hours - DIURNAL_PHASE_SHIFT) / 24.0,
            semi_diurnal: TAU * local_time_hours / 12.0,
            ter_diurnal: TAU * local_time_hours / 8.0,
        }
    }
}

/// Solar zenith terms: (adjusted, further adjusted)
pub(crate) fn zenith_terms(latitude_rad: f64, declination_rad: f64) -> (f64, f64) {
    let cos_zenith =
        latitude_rad.sin() * declination_rad.sin() + latitude_rad.cos() * declination_rad.cos();
    let adjusted = cos_zenith.cos() - 2.0 * latitude_rad / PI * declination_rad.sin();
    let further_adjusted = cos_zenith.cos() + ZENITH_CORRECTION;
    (adjusted, further_adjusted)
}

/// Returns +1.0 in northern hemisphere, -1.0 in southern hemisphere.
pub(crate) fn hemisphere(latitude_rad: f64) -> Result<f64, Error> {
    if latitude_rad == 0.0 {
        #[cfg(feature = "log")]
        error!("local time factor: zero latitude");
        return Err(Error::ZeroLatitude);
    }
    Ok(latitude_rad / latitude_rad.abs())
}

fn seasonal_cosine(day_of_year: f64) -> f64 {
    (TAU * (day_of_year - SOLSTICE_DAY) / TROPICAL_YEAR_DAYS).cos()
}

/// Local time (hours) at the beginning of the bite-out
pub(crate) fn bite_out_onset(day_of_year: f64, hemisphere: f64) -> f64 {
    BITE_OUT_ONSET + BITE_OUT_ONSET_EXCURSION * seasonal_cosine(day_of_year) * hemisphere
}

/// Summer daytime bite-out magnitude (unitless)
pub(crate) fn bite_out(
    local_time_hours: f64,
    latitude_rad: f64,
    day_of_year: f64,
    hemisphere: f64,
) -> f64 {
    let onset = bite_out_onset(day_of_year, hemisphere);

    #[cfg(feature = "log")]
    trace!("bite-out onset: {:.3}h", onset);

    let lat_ddeg = latitude_rad.abs().to_degrees();
    let lat_envelope = (-(lat_ddeg - BITE_OUT_LATITUDE_DDEG).powi(2)
        / (2.0 * BITE_OUT_LATITUDE_WIDTH_DDEG.powi(2)))
    .exp();
    let time_envelope =
        (-(local_time_hours - onset).powi(2) / (2.0 * BITE_OUT_TIME_WIDTH.powi(2))).exp();

    lat_envelope * seasonal_cosine(day_of_year) * time_envelope * hemisphere
}

/*
 * F1 evaluation, once inputs have been validated
 */
pub(crate) fn local_time_factor(
    local_time_hours: f64,
    latitude_rad: f64,
    declination_rad: f64,
    day_of_year: f64,
    with_bite_out: bool,
    c: &LocalTimeCoefficients,
) -> Result<f64, Error> {
    let hemisphere = hemisphere(latitude_rad)?;

    let phases = HarmonicPhases::new(local_time_hours);
    let (adjusted, further_adjusted) = zenith_terms(latitude_rad, declination_rad);

    #[cfg(feature = "log")]
    trace!(
        "local time factor: {:?} zenith terms ({:.6}, {:.6})",
        phases,
        adjusted,
        further_adjusted
    );

    let harmonics = c.diurnal * phases.diurnal.cos()
        + c.semi_diurnal_cos * phases.semi_diurnal.cos()
        + c.semi_diurnal_sin * phases.semi_diurnal.sin()
        + c.ter_diurnal_cos * phases.ter_diurnal.cos()
        + c.ter_diurnal_sin * phases.ter_diurnal.sin();

    let mut f1 = further_adjusted.cos() + harmonics * adjusted.cos();
    if with_bite_out {
        f1 += c.bite_out * bite_out(local_time_hours, latitude_rad, day_of_year, hemisphere);
    }

    #[cfg(feature = "log")]
    debug!("F1({:.2}h, doy={}) = {}", local_time_hours, day_of_year, f1);

    Ok(f1)
}

/// Evaluates the local time factor (F1): diurnal, semi-diurnal and
/// ter-diurnal variations modulated by the solar zenith angle,
/// plus the summer daytime bite-out.
/// - local_time_hours: within [0, 24[
/// - latitude_radians: geographic latitude, must not be zero
/// - sun_declination_radians: solar declination
/// - day_of_year: within [1, 366]
pub fn evaluate_local_time_factor(
    local_time_hours: f64,
    latitude_radians: f64,
    sun_declination_radians: f64,
    day_of_year: u16,
    coefficients: &Coefficients,
) -> Result<f64, Error> {
    check_local_time(local_time_hours)?;
    check_day_of_year(day_of_year)?;
    local_time_factor(
        local_time_hours,
        latitude_radians,
        sun_declination_radians,
        day_of_year as f64,
        true,
        &coefficients.local_time,
    )
}
