use crate::prelude::Coefficients;

/// ΔF10.7 multiplier found in early formulations of the solar activity factor
pub const HISTORICAL_SOLAR_FLUX_DELTA: f64 = 12.0;

fn default_solar_flux_delta() -> Option<f64> {
    None
}

fn default_bite_out() -> bool {
    true
}

/// Model parametrization
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Model coefficients (c0..c12)
    #[cfg_attr(feature = "serde", serde(default))]
    pub coefficients: Coefficients,
    /// Optional ΔF10.7 multiplier applied to the solar flux index
    /// in the solar activity factor. The canonical model does not use it.
    #[cfg_attr(feature = "serde", serde(default = "default_solar_flux_delta"))]
    pub solar_flux_delta: Option<f64>,
    /// Summer daytime bite-out term of the local time factor
    #[cfg_attr(feature = "serde", serde(default = "default_bite_out"))]
    pub bite_out: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
            solar_flux_delta: default_solar_flux_delta(),
            bite_out: default_bite_out(),
        }
    }
}

impl Config {
    /// Returns a copy of Self with given [Coefficients]
    pub fn with_coefficients(&self, coefficients: Coefficients) -> Self {
        let mut s = *self;
        s.coefficients = coefficients;
        s
    }
    /// Returns a copy of Self using given ΔF10.7 multiplier
    pub fn with_solar_flux_delta(&self, delta: f64) -> Self {
        let mut s = *self;
        s.solar_flux_delta = Some(delta);
        s
    }
    /// Returns a copy of Self without summer daytime bite-out
    pub fn without_bite_out(&self) -> Self {
        let mut s = *self;
        s.bite_out = false;
        s
    }
}

impl From<Coefficients> for Config {
    fn from(coefficients: Coefficients) -> Self {
        Self::default().with_coefficients(coefficients)
    }
}
