//! The five NPDM factors.
//! Each factor is a pure function of its own inputs and
//! its own group of [crate::prelude::Coefficients].
mod crest;
mod geomagnetic;
mod local_time;
mod seasonal;
mod solar_activity;

pub use crest::evaluate_ionization_crest_factor;
pub use geomagnetic::evaluate_geomagnetic_field_factor;
pub use local_time::evaluate_local_time_factor;
pub use seasonal::evaluate_seasonal_variation_factor;
pub use solar_activity::evaluate_solar_activity_factor;

pub(crate) use crest::ionization_crests;
pub(crate) use geomagnetic::geomagnetic_field;
pub(crate) use local_time::local_time_factor;
pub(crate) use seasonal::seasonal_variation;
pub(crate) use solar_activity::solar_activity;
