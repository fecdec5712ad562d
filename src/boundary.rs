//! Interfaces to external path tools: great circle interpolation
//! and terrain elevation services. This crate does not implement them.
use crate::prelude::Error;

#[cfg(feature = "log")]
use log::warn;

/// Geographic coordinates in decimal degrees
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    /// Latitude (ddeg)
    pub latitude_ddeg: f64,
    /// Longitude (ddeg)
    pub longitude_ddeg: f64,
}

impl Coordinates {
    /// Builds new [Coordinates] from decimal degrees
    pub fn new(latitude_ddeg: f64, longitude_ddeg: f64) -> Self {
        Self {
            latitude_ddeg,
            longitude_ddeg,
        }
    }
}

/// Produces intermediate points between two endpoints
pub trait CoordinateInterpolator {
    /// Returns the ordered sequence of points from `start` to `end`,
    /// spaced by `step_m` meters.
    fn interpolate(&self, start: Coordinates, end: Coordinates, step_m: f64) -> Vec<Coordinates>;
}

/// Terrain elevation service
pub trait ElevationProvider {
    /// Returns one elevation (meters) per coordinate, in the same order.
    /// The service may fail, or answer with fewer values than requested.
    fn elevations(&self, points: &[Coordinates]) -> Result<Vec<f64>, Error>;
}

/// Elevation profile along a path
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ElevationProfile {
    /// Points that were granted an elevation (meters)
    pub points: Vec<(Coordinates, f64)>,
    /// Number of points requested to the elevation service
    pub requested: usize,
}

impl ElevationProfile {
    /// Interpolates the path between `start` and `end` and
    /// looks up the elevation of each point.
    pub fn fetch<I: CoordinateInterpolator, E: ElevationProvider>(
        interpolator: &I,
        provider: &E,
        start: Coordinates,
        end: Coordinates,
        step_m: f64,
    ) -> Result<Self, Error> {
        let path = interpolator.interpolate(start, end, step_m);
        let requested = path.len();
        let elevations = provider.elevations(&path)?;

        if elevations.len() < requested {
            #[cfg(feature = "log")]
            warn!(
                "elevation profile: {}/{} points resolved",
                elevations.len(),
                requested
            );
        }

        Ok(Self {
            points: path.into_iter().zip(elevations).collect(),
            requested,
        })
    }

    /// Returns true if every requested point was resolved
    pub fn is_complete(&self) -> bool {
        self.points.len() == self.requested
    }
}
