//! Model inputs
use crate::{
    error::{check_day_of_year, check_local_time},
    prelude::{Epoch, Error},
    solar::solar_declination,
};

use hifitime::{TimeScale, Unit};

use dms_coordinates::DMS;

#[cfg(feature = "log")]
use log::trace;

/// [Observation] gathers all geophysical inputs of the model,
/// for one location at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Local time (hours), within [0, 24[
    pub local_time_hours: f64,
    /// Day of year, within [1, 366]
    pub day_of_year: u16,
    /// Geographic latitude (radians)
    pub latitude_rad: f64,
    /// Solar declination (radians)
    pub sun_declination_rad: f64,
    /// Geomagnetic latitude (decimal degrees)
    pub geomagnetic_latitude_ddeg: f64,
    /// F10.7 solar radio flux index (sfu)
    pub solar_flux_index: f64,
}

impl Observation {
    /// Builds a new [Observation].
    /// Fails if local time or day of year lie outside of their domain.
    pub fn new(
        local_time_hours: f64,
        day_of_year: u16,
        latitude_rad: f64,
        sun_declination_rad: f64,
        geomagnetic_latitude_ddeg: f64,
        solar_flux_index: f64,
    ) -> Result<Self, Error> {
        let obs = Self {
            local_time_hours,
            day_of_year,
            latitude_rad,
            sun_declination_rad,
            geomagnetic_latitude_ddeg,
            solar_flux_index,
        };
        obs.validate()?;
        Ok(obs)
    }

    /// Builds an [Observation] at given [Epoch] and location.
    /// Day of year and local time are those of the local solar instant,
    /// so they always describe the same day. The solar declination is
    /// evaluated at the UTC instant.
    /// - latitude_rad, longitude_rad: geographic coordinates (east positive)
    /// - geomagnetic_latitude_ddeg: geomagnetic latitude (decimal degrees)
    /// - solar_flux_index: F10.7 (sfu)
    pub fn from_epoch(
        epoch: Epoch,
        latitude_rad: f64,
        longitude_rad: f64,
        geomagnetic_latitude_ddeg: f64,
        solar_flux_index: f64,
    ) -> Result<Self, Error> {
        let utc = epoch.to_time_scale(TimeScale::UTC);
        let sun_declination_rad = solar_declination(utc.day_of_year());

        let local = utc + Unit::Hour * (longitude_rad.to_degrees() / 15.0);
        let in_year = local.duration_in_year();
        let midnight = in_year.floor(Unit::Day * 1);

        let day_of_year = midnight.to_unit(Unit::Day).round() as u16 + 1;
        let local_time_hours = (in_year - midnight).to_unit(Unit::Hour);

        #[cfg(feature = "log")]
        trace!(
            "{}: local={} doy={} lst={:.3}h decl={:.4}",
            epoch,
            local,
            day_of_year,
            local_time_hours,
            sun_declination_rad
        );

        Self::new(
            local_time_hours,
            day_of_year,
            latitude_rad,
            sun_declination_rad,
            geomagnetic_latitude_ddeg,
            solar_flux_index,
        )
    }

    /// Verifies local time and day of year domains
    pub fn validate(&self) -> Result<(), Error> {
        check_local_time(self.local_time_hours)?;
        check_day_of_year(self.day_of_year)
    }

    /// Returns true if this [Observation] lies in northern hemisphere
    pub fn is_northern(&self) -> bool {
        self.latitude_rad > 0.0
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "LT={:.2}h DOY={} lat={} decl={:.4}rad mlat={:.3}° F10.7={}",
            self.local_time_hours,
            self.day_of_year,
            DMS::from_ddeg_latitude(self.latitude_rad.to_degrees()),
            self.sun_declination_rad,
            self.geomagnetic_latitude_ddeg,
            self.solar_flux_index,
        )
    }
}
