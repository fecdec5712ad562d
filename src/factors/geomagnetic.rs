use crate::prelude::{Coefficients, Error};

#[cfg(feature = "log")]
use log::debug;

/*
 * F3 for a geomagnetic latitude in decimal degrees
 */
pub(crate) fn geomagnetic_field(geomagnetic_latitude_ddeg: f64, amplitude: f64) -> f64 {
    1.0 + amplitude * geomagnetic_latitude_ddeg.to_radians().cos()
}

/// Evaluates the geomagnetic field dependency (F3).
/// - geomagnetic_latitude: decimal degrees
///
/// This factor never fails, it returns a [Result] to
/// share the signature of other factors.
pub fn evaluate_geomagnetic_field_factor(
    geomagnetic_latitude: f64,
    coefficients: &Coefficients,
) -> Result<f64, Error> {
    let f3 = geomagnetic_field(geomagnetic_latitude, coefficients.geomagnetic);

    #[cfg(feature = "log")]
    debug!("F3({:.3}°) = {}", geomagnetic_latitude, f3);

    Ok(f3)
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn magnetic_equator() {
        let mut coefs = Coefficients::from([0.0; 13]);
        coefs.geomagnetic = 0.25;
        assert_eq!(evaluate_geomagnetic_field_factor(0.0, &coefs), Ok(1.25));

        // other coefficients have no say
        let mut coefs = Coefficients::from([42.0; 13]);
        coefs.geomagnetic = 0.25;
        assert_eq!(evaluate_geomagnetic_field_factor(0.0, &coefs), Ok(1.25));
    }
    #[test]
    fn symmetry() {
        let coefs = Coefficients::from([0.5; 13]);
        for lat in [5.0, 16.0, 45.0, 89.0] {
            let north = evaluate_geomagnetic_field_factor(lat, &coefs).unwrap();
            let south = evaluate_geomagnetic_field_factor(-lat, &coefs).unwrap();
            assert_eq!(north, south);
        }
        let pole = evaluate_geomagnetic_field_factor(90.0, &coefs).unwrap();
        assert!((pole - 1.0).abs() < 1e-12);
    }
}
