use crate::{
    coefficients::SolarActivityCoefficients,
    prelude::{Coefficients, Error},
};

#[cfg(feature = "log")]
use log::debug;

/*
 * F5, optionally scaled by a ΔF10.7 multiplier
 */
pub(crate) fn solar_activity(
    solar_flux_index: f64,
    delta: Option<f64>,
    c: &SolarActivityCoefficients,
) -> f64 {
    match delta {
        Some(delta) => c.offset + c.slope * solar_flux_index * delta,
        None => c.offset + c.slope * solar_flux_index,
    }
}

/// Evaluates the solar activity dependency (F5),
/// linear in the F10.7 solar radio flux index (sfu).
pub fn evaluate_solar_activity_factor(
    solar_flux_index: f64,
    coefficients: &Coefficients,
) -> Result<f64, Error> {
    let f5 = solar_activity(solar_flux_index, None, &coefficients.solar_activity);

    #[cfg(feature = "log")]
    debug!("F5({} sfu) = {}", solar_flux_index, f5);

    Ok(f5)
}
