//! NPDM model coefficients
use crate::prelude::Error;

/// Coefficients of the local time factor (F1)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalTimeCoefficients {
    /// Diurnal (24h) cosine amplitude (c0)
    pub diurnal: f64,
    /// Semi-diurnal (12h) cosine amplitude (c1)
    pub semi_diurnal_cos: f64,
    /// Semi-diurnal (12h) sine amplitude (c2)
    pub semi_diurnal_sin: f64,
    /// Ter-diurnal (8h) cosine amplitude (c3)
    pub ter_diurnal_cos: f64,
    /// Ter-diurnal (8h) sine amplitude (c4)
    pub ter_diurnal_sin: f64,
    /// Summer daytime bite-out amplitude (c5)
    pub bite_out: f64,
}

/// Coefficients of the seasonal variation factor (F2)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonalCoefficients {
    /// Annual amplitude (c6)
    pub annual: f64,
    /// Semi-annual amplitude (c7)
    pub semi_annual: f64,
}

/// Coefficients of the ionization crests factor (F4)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrestCoefficients {
    /// Northward crest amplitude (c9)
    pub northward: f64,
    /// Southward crest amplitude (c10)
    pub southward: f64,
}

/// Coefficients of the solar activity factor (F5)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarActivityCoefficients {
    /// Constant term (c11)
    pub offset: f64,
    /// F10.7 slope (c12), per solar flux unit
    pub slope: f64,
}

/// [Coefficients] of the Neustrelitz Peak Density Model.
/// Each factor only sees its own group of terms, in the order
/// they are usually published (c0..c12):
/// ```
/// use npdm::prelude::Coefficients;
///
/// let coefs = Coefficients::from([
///     1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0,
/// ]);
/// assert_eq!(coefs.local_time.bite_out, 6.0);
/// assert_eq!(coefs.geomagnetic, 9.0);
/// assert_eq!(coefs.solar_activity.slope, 13.0);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coefficients {
    /// F1 terms (c0..c5)
    pub local_time: LocalTimeCoefficients,
    /// F2 terms (c6, c7)
    pub seasonal: SeasonalCoefficients,
    /// F3 amplitude (c8)
    pub geomagnetic: f64,
    /// F4 terms (c9, c10)
    pub crests: CrestCoefficients,
    /// F5 terms (c11, c12)
    pub solar_activity: SolarActivityCoefficients,
}

impl Coefficients {
    /// Number of model coefficients
    pub const COUNT: usize = 13;

    /// Builds [Coefficients] from a flat slice (c0..c12).
    /// Extra trailing values are ignored.
    pub fn from_slice(values: &[f64]) -> Result<Self, Error> {
        let values: [f64; Self::COUNT] = values
            .get(..Self::COUNT)
            .and_then(|head| head.try_into().ok())
            .ok_or(Error::ShortCoefficients(values.len()))?;
        Ok(Self::from(values))
    }

    /// Returns the flat (c0..c12) representation
    pub fn to_array(&self) -> [f64; Self::COUNT] {
        [
            self.local_time.diurnal,
            self.local_time.semi_diurnal_cos,
            self.local_time.semi_diurnal_sin,
            self.local_time.ter_diurnal_cos,
            self.local_time.ter_diurnal_sin,
            self.local_time.bite_out,
            self.seasonal.annual,
            self.seasonal.semi_annual,
            self.geomagnetic,
            self.crests.northward,
            self.crests.southward,
            self.solar_activity.offset,
            self.solar_activity.slope,
        ]
    }
}

impl From<[f64; Coefficients::COUNT]> for Coefficients {
    fn from(c: [f64; Coefficients::COUNT]) -> Self {
        Self {
            local_time: LocalTimeCoefficients {
                diurnal: c[0],
                semi_diurnal_cos: c[1],
                semi_diurnal_sin: c[2],
                ter_diurnal_cos: c[3],
                ter_diurnal_sin: c[4],
                bite_out: c[5],
            },
            seasonal: SeasonalCoefficients {
                annual: c[6],
                semi_annual: c[7],
            },
            geomagnetic: c[8],
            crests: CrestCoefficients {
                northward: c[9],
                southward: c[10],
            },
            solar_activity: SolarActivityCoefficients {
                offset: c[11],
                slope: c[12],
            },
        }
    }
}

impl TryFrom<&[f64]> for Coefficients {
    type Error = Error;
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl From<Coefficients> for [f64; Coefficients::COUNT] {
    fn from(coefs: Coefficients) -> Self {
        coefs.to_array()
    }
}
