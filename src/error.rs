use thiserror::Error;

/// Errors that may rise while building model inputs
/// or evaluating one of the NPDM factors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The model needs 13 coefficients
    #[error("13 model coefficients expected, got {0}")]
    ShortCoefficients(usize),
    /// Local time is expressed in hours, within [0, 24[
    #[error("local time {0}h is outside [0, 24[")]
    LocalTimeOutOfRange(f64),
    /// Day of year is 1-based, within [1, 366]
    #[error("day of year {0} is outside [1, 366]")]
    DayOfYearOutOfRange(u16),
    /// The bite-out terms depend on the hemisphere,
    /// which is undefined right on the geographic equator
    #[error("hemisphere is undefined for a zero geographic latitude")]
    ZeroLatitude,
    /// Elevation provider failure
    #[error("elevation lookup failed: {0}")]
    Elevation(String),
}

impl Error {
    /// Returns true if this is an input validation error,
    /// raised before any computation takes place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ShortCoefficients(_)
                | Self::LocalTimeOutOfRange(_)
                | Self::DayOfYearOutOfRange(_)
        )
    }

    /// Returns true if this is a mathematical domain error
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::ZeroLatitude)
    }
}

/// Fails when local time does not lie within [0, 24[ (NaN included)
pub(crate) fn check_local_time(local_time_hours: f64) -> Result<(), Error> {
    if (0.0..24.0).contains(&local_time_hours) {
        Ok(())
    } else {
        Err(Error::LocalTimeOutOfRange(local_time_hours))
    }
}

/// Fails when day of year does not lie within [1, 366]
pub(crate) fn check_day_of_year(day_of_year: u16) -> Result<(), Error> {
    if (1..=366).contains(&day_of_year) {
        Ok(())
    } else {
        Err(Error::DayOfYearOutOfRange(day_of_year))
    }
}
