//! Neustrelitz Peak Density Model
use crate::{
    factors::{
        geomagnetic_field, ionization_crests, local_time_factor, seasonal_variation,
        solar_activity,
    },
    prelude::{Coefficients, Config, Error, Observation},
};

#[cfg(feature = "log")]
use log::debug;

/// Combines the five model factors into NmF2.
/// Factors are not verified: non finite values propagate.
pub fn evaluate_peak_electron_density(f1: f64, f2: f64, f3: f64, f4: f64, f5: f64) -> f64 {
    f1 * f2 * f3 * f4 * f5
}

/// The five NPDM factors, evaluated for one [Observation]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Factors {
    /// F1: local time dependency
    pub local_time: f64,
    /// F2: seasonal variation
    pub seasonal: f64,
    /// F3: geomagnetic field dependency
    pub geomagnetic: f64,
    /// F4: equatorial ionization crests
    pub crests: f64,
    /// F5: solar activity dependency
    pub solar_activity: f64,
}

impl Factors {
    /// Peak electron density of the F2 layer
    pub fn nmf2(&self) -> f64 {
        evaluate_peak_electron_density(
            self.local_time,
            self.seasonal,
            self.geomagnetic,
            self.crests,
            self.solar_activity,
        )
    }
}

/// [Npdm] evaluates the Neustrelitz Peak Density Model
/// for a given [Config]:
/// ```
/// use npdm::prelude::*;
///
/// let coefs = Coefficients::from([
///     1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0,
/// ]);
/// let npdm = Npdm::from_coefficients(coefs);
///
/// let obs = Observation::new(18.0, 258, 0.867, 0.8712, 0.049, 1.5)
///     .unwrap();
///
/// let factors = npdm.factors(&obs)
///     .unwrap();
/// assert_eq!(factors.solar_activity, 31.5);
///
/// let nmf2 = npdm.nmf2(&obs)
///     .unwrap();
/// assert_eq!(nmf2, factors.nmf2());
///
/// // on the geographic equator, the hemisphere is undefined
/// let obs = Observation::new(18.0, 258, 0.0, 0.8712, 0.049, 1.5)
///     .unwrap();
/// assert!(npdm.nmf2(&obs).is_err());
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Npdm {
    /// Model parametrization
    pub cfg: Config,
}

impl Npdm {
    /// Builds a new [Npdm] from given [Config]
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Builds a new [Npdm] with default [Config] and given [Coefficients]
    pub fn from_coefficients(coefficients: Coefficients) -> Self {
        Self::new(Config::from(coefficients))
    }

    /// Evaluates the five model factors.
    /// [Observation] is validated prior any calculation.
    pub fn factors(&self, obs: &Observation) -> Result<Factors, Error> {
        obs.validate()?;
        let c = &self.cfg.coefficients;

        let factors = Factors {
            local_time: local_time_factor(
                obs.local_time_hours,
                obs.latitude_rad,
                obs.sun_declination_rad,
                obs.day_of_year as f64,
                self.cfg.bite_out,
                &c.local_time,
            )?,
            seasonal: seasonal_variation(obs.day_of_year as f64, &c.seasonal),
            geomagnetic: geomagnetic_field(obs.geomagnetic_latitude_ddeg, c.geomagnetic),
            crests: ionization_crests(
                obs.geomagnetic_latitude_ddeg,
                obs.local_time_hours,
                &c.crests,
            ),
            solar_activity: solar_activity(
                obs.solar_flux_index,
                self.cfg.solar_flux_delta,
                &c.solar_activity,
            ),
        };

        #[cfg(feature = "log")]
        debug!("{}: {:?}", obs, factors);

        Ok(factors)
    }

    /// Evaluates NmF2 for given [Observation]
    pub fn nmf2(&self, obs: &Observation) -> Result<f64, Error> {
        let nmf2 = self.factors(obs)?.nmf2();

        #[cfg(feature = "log")]
        debug!("{}: nmf2={}", obs, nmf2);

        Ok(nmf2)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn combiner_identity() {
        assert_eq!(evaluate_peak_electron_density(1.0, 1.0, 1.0, 1.0, 1.0), 1.0);
        assert_eq!(evaluate_peak_electron_density(2.0, 0.5, 4.0, 0.25, 3.0), 3.0);
    }
    #[test]
    fn non_finite_propagation() {
        let nmf2 = evaluate_peak_electron_density(f64::NAN, 1.0, 1.0, 1.0, 1.0);
        assert!(nmf2.is_nan());
        let nmf2 = evaluate_peak_electron_density(1.0, 2.0, f64::INFINITY, 1.0, 1.0);
        assert_eq!(nmf2, f64::INFINITY);
        let nmf2 = evaluate_peak_electron_density(1.0, 0.0, f64::INFINITY, 1.0, 1.0);
        assert!(nmf2.is_nan());
    }
    #[test]
    fn unit_factors() {
        let mut coefs = Coefficients::default();
        coefs.solar_activity.offset = 1.0;
        let npdm = Npdm::from_coefficients(coefs);
        let obs = Observation::new(11.0, 100, -0.3, 0.1, 16.0, 120.0).unwrap();
        let factors = npdm.factors(&obs).unwrap();
        assert_eq!(factors.seasonal, 1.0);
        assert_eq!(factors.geomagnetic, 1.0);
        assert_eq!(factors.crests, 1.0);
        assert_eq!(factors.solar_activity, 1.0);
        let forced = Factors {
            local_time: 1.0,
            ..factors
        };
        assert_eq!(forced.nmf2(), 1.0);
    }
    #[test]
    fn solar_flux_delta() {
        let mut coefs = Coefficients::default();
        coefs.solar_activity.offset = 1.0;
        coefs.solar_activity.slope = 0.5;
        let obs = Observation::new(11.0, 100, -0.3, 0.1, 16.0, 2.0).unwrap();

        let canonical = Npdm::from_coefficients(coefs);
        assert_eq!(canonical.factors(&obs).unwrap().solar_activity, 2.0);

        let historical = Npdm::new(Config::from(coefs).with_solar_flux_delta(12.0));
        assert_eq!(historical.factors(&obs).unwrap().solar_activity, 13.0);
    }
    #[test]
    fn bite_out_toggle() {
        let mut coefs = Coefficients::default();
        coefs.local_time.bite_out = 1.0;
        // 45°N, summer solstice, at bite-out onset
        let obs = Observation::new(14.5, 181, 45.0_f64.to_radians(), 0.4, 20.0, 100.0).unwrap();

        let with = Npdm::from_coefficients(coefs).factors(&obs).unwrap();
        let without = Npdm::new(Config::from(coefs).without_bite_out())
            .factors(&obs)
            .unwrap();
        assert!((with.local_time - without.local_time - 1.0).abs() < 1e-9);
    }
    #[test]
    fn validation_before_domain() {
        let npdm = Npdm::default();
        let mut obs = Observation::new(12.0, 10, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(npdm.factors(&obs), Err(Error::ZeroLatitude));
        obs.day_of_year = 0;
        assert_eq!(npdm.factors(&obs), Err(Error::DayOfYearOutOfRange(0)));
    }
}
