//! # Eclipse engine
//!
//! The geometric and numeric core of the crate:
//!
//! 1. [`besselian`] — conversion of apparent Sun/Moon positions into
//!    Besselian elements, and the five-sample polynomial pipeline.
//! 2. [`polynomial`] — least-squares cubic fit over the hourly sample grid.
//! 3. [`separation`] — Sun–Moon angular separation and the eclipse-possible
//!    threshold.
//! 4. [`refiner`] — dense scan for the instant of minimum separation.
//! 5. [`finder`] — the coarse two-hour scan that drives the refiner across a
//!    date range.
//!
//! Everything here is a pure function of an instant (or a small set of
//! instants) and the injected
//! [`EphemerisProvider`](crate::ephemeris::EphemerisProvider); the only
//! state is the finder's cursor.

use nalgebra::Vector3;

use crate::constants::Radian;

pub mod besselian;
pub mod finder;
pub mod polynomial;
pub mod refiner;
pub mod separation;

pub use besselian::{BesselianElements, BesselianPolynomials, SampleWindow};
pub use finder::{EclipseFinder, FinderParams, FinderParamsBuilder};
pub use polynomial::{fit_cubic, CubicCoefficients};
pub use refiner::{refine, MinimumSeparation};
pub use separation::SeparationCheck;

/// Unit direction vector for a (right ascension, declination) pair.
///
/// Equatorial convention: x toward the equinox, z toward the north
/// celestial pole.
#[inline]
pub(crate) fn radec_unit_vector(ra: Radian, dec: Radian) -> Vector3<f64> {
    Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
}

#[cfg(test)]
mod eclipse_mod_test {
    use super::*;

    #[test]
    fn test_radec_unit_vector() {
        let v = radec_unit_vector(0.0, 0.0);
        assert!((v - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-15);

        let v = radec_unit_vector(std::f64::consts::FRAC_PI_2, 0.0);
        assert!((v - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-15);

        let v = radec_unit_vector(0.0, std::f64::consts::FRAC_PI_2);
        assert!((v - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-15);
    }
}
