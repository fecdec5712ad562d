#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * NPDM: Neustrelitz Peak Density Model.
 * Empirical model of the F2 layer peak electron density (NmF2),
 * expressed as the product of five independent factors.
 * This crate is shipped under the MPL-2.0 License.
 */

pub mod angle;
pub mod boundary;
pub mod factors;
pub mod solar;

mod cfg;
mod coefficients;
mod error;
mod model;
mod observation;

#[cfg(test)]
mod tests;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::cfg::{Config, HISTORICAL_SOLAR_FLUX_DELTA};
    pub use crate::coefficients::{
        Coefficients, CrestCoefficients, LocalTimeCoefficients, SeasonalCoefficients,
        SolarActivityCoefficients,
    };
    pub use crate::error::Error;
    pub use crate::factors::{
        evaluate_geomagnetic_field_factor, evaluate_ionization_crest_factor,
        evaluate_local_time_factor, evaluate_seasonal_variation_factor,
        evaluate_solar_activity_factor,
    };
    pub use crate::model::{evaluate_peak_electron_density, Factors, Npdm};
    pub use crate::observation::Observation;

    // pub re-export
    pub use hifitime::Epoch;
}
