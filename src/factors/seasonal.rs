use crate::{
    coefficients::SeasonalCoefficients,
    error::check_day_of_year,
    prelude::{Coefficients, Error},
};

#[cfg(feature = "log")]
use log::debug;

use std::f64::consts::TAU;

// phase shifts (days), counted from January 1st
const ANNUAL_PHASE_SHIFT: f64 = 18.0;
const SEMI_ANNUAL_PHASE_SHIFT: f64 = 6.0;

const TROPICAL_YEAR_DAYS: f64 = 365.25;

/*
 * F2 for a (possibly fractional) day of year
 */
pub(crate) fn seasonal_variation(day_of_year: f64, c: &SeasonalCoefficients) -> f64 {
    let annual = TAU * (day_of_year - ANNUAL_PHASE_SHIFT) / TROPICAL_YEAR_DAYS;
    let semi_annual = 2.0 * TAU * (day_of_year - SEMI_ANNUAL_PHASE_SHIFT) / TROPICAL_YEAR_DAYS;
    1.0 + c.annual * annual.cos() + c.semi_annual * semi_annual.cos()
}

/// Evaluates the seasonal variation factor (F2):
/// annual and semi-annual variations of NmF2.
/// - day_of_year: within [1, 366]
pub fn evaluate_seasonal_variation_factor(
    day_of_year: u16,
    coefficients: &Coefficients,
) -> Result<f64, Error> {
    check_day_of_year(day_of_year)?;
    let f2 = seasonal_variation(day_of_year as f64, &coefficients.seasonal);

    #[cfg(feature = "log")]
    debug!("F2(doy={}) = {}", day_of_year, f2);

    Ok(f2)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{thread_rng, Rng};
    #[test]
    fn yearly_periodicity() {
        let c = SeasonalCoefficients {
            annual: 0.3,
            semi_annual: -0.7,
        };
        let mut rng = thread_rng();
        for _ in 0..100 {
            let doy: f64 = rng.gen_range(1.0..367.0);
            let f2 = seasonal_variation(doy, &c);
            let next_year = seasonal_variation(doy + 365.25, &c);
            assert!((f2 - next_year).abs() < 1e-9, "doy={}", doy);
        }
    }
    #[test]
    fn phase_shifts() {
        let annual_only = SeasonalCoefficients {
            annual: 1.0,
            semi_annual: 0.0,
        };
        assert!((seasonal_variation(18.0, &annual_only) - 2.0).abs() < 1e-12);

        let semi_annual_only = SeasonalCoefficients {
            annual: 0.0,
            semi_annual: 1.0,
        };
        assert!((seasonal_variation(6.0, &semi_annual_only) - 2.0).abs() < 1e-12);
        // second semi-annual maximum, half a year later
        let later = 6.0 + 365.25 / 2.0;
        assert!((seasonal_variation(later, &semi_annual_only) - 2.0).abs() < 1e-9);
    }
    #[test]
    fn day_of_year_validation() {
        let coefs = Coefficients::default();
        assert_eq!(evaluate_seasonal_variation_factor(1, &coefs), Ok(1.0));
        assert_eq!(evaluate_seasonal_variation_factor(366, &coefs), Ok(1.0));
        assert_eq!(
            evaluate_seasonal_variation_factor(0, &coefs),
            Err(Error::DayOfYearOutOfRange(0))
        );
        assert_eq!(
            evaluate_seasonal_variation_factor(400, &coefs),
            Err(Error::DayOfYearOutOfRange(400))
        );
    }
}
