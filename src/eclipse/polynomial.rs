//! Least-squares cubic fit of one Besselian element over the hourly grid.
//!
//! Five samples at τ ∈ {−2, −1, 0, +1, +2} hours over-determine a cubic, so
//! the solve minimizes the residual sum of squares; a nonzero residual is
//! expected, not a fault. The solver goes through the SVD of the fixed 5×4
//! design matrix rather than normal equations, which keeps the conditioning
//! of the fit independent of the sample magnitudes.

use nalgebra::{SMatrix, SVector};
use serde::Serialize;

use crate::umbra_errors::UmbraError;

/// Number of samples the fit expects.
pub const SAMPLE_COUNT: usize = 5;

/// Sample offsets from the central instant, in hours.
pub const SAMPLE_OFFSETS_HOURS: [f64; SAMPLE_COUNT] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// Coefficients of `c0 + c1·τ + c2·τ² + c3·τ³`, τ in hours from the central
/// instant, valid over roughly ±2 h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicCoefficients {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
}

impl CubicCoefficients {
    /// Evaluate the cubic at `tau` hours from the central instant.
    pub fn evaluate(&self, tau: f64) -> f64 {
        ((self.c3 * tau + self.c2) * tau + self.c1) * tau + self.c0
    }

    /// Coefficients in ascending-power order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.c0, self.c1, self.c2, self.c3]
    }
}

/// Fit a cubic to five equally spaced samples by least squares.
///
/// Arguments
/// ---------
/// * `samples`: element values at τ = −2, −1, 0, +1, +2 hours, in that order.
///
/// Return
/// ------
/// * The fitted [`CubicCoefficients`], or
///   [`UmbraError::InvalidSampleCount`] unless exactly five samples are
///   given.
pub fn fit_cubic(samples: &[f64]) -> Result<CubicCoefficients, UmbraError> {
    if samples.len() != SAMPLE_COUNT {
        return Err(UmbraError::InvalidSampleCount {
            expected: SAMPLE_COUNT,
            got: samples.len(),
        });
    }

    let design =
        SMatrix::<f64, SAMPLE_COUNT, 4>::from_fn(|i, j| SAMPLE_OFFSETS_HOURS[i].powi(j as i32));
    let rhs = SVector::<f64, SAMPLE_COUNT>::from_row_slice(samples);

    let solution = design
        .svd(true, true)
        .solve(&rhs, f64::EPSILON)
        .map_err(|e| UmbraError::FitFailed(e.to_string()))?;

    Ok(CubicCoefficients {
        c0: solution[0],
        c1: solution[1],
        c2: solution[2],
        c3: solution[3],
    })
}

#[cfg(test)]
mod polynomial_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_cubic_recovered() {
        // samples of 0.5 − 0.3τ + 0.02τ² + 0.001τ³ are fit exactly
        let poly = |tau: f64| 0.5 - 0.3 * tau + 0.02 * tau * tau + 0.001 * tau * tau * tau;
        let samples: Vec<f64> = SAMPLE_OFFSETS_HOURS.iter().map(|&t| poly(t)).collect();

        let coeffs = fit_cubic(&samples).unwrap();
        assert_relative_eq!(coeffs.c0, 0.5, max_relative = 1e-12);
        assert_relative_eq!(coeffs.c1, -0.3, max_relative = 1e-12);
        assert_relative_eq!(coeffs.c2, 0.02, max_relative = 1e-10);
        assert_relative_eq!(coeffs.c3, 0.001, max_relative = 1e-9);
    }

    #[test]
    fn test_near_interpolation_at_center() {
        // a gentle quartic perturbation: the fit is no longer exact but the
        // center value survives to high relative accuracy
        let poly = |tau: f64| 0.8 + 0.1 * tau - 0.05 * tau * tau + 1e-5 * tau.powi(4);
        let samples: Vec<f64> = SAMPLE_OFFSETS_HOURS.iter().map(|&t| poly(t)).collect();

        let coeffs = fit_cubic(&samples).unwrap();
        assert_relative_eq!(coeffs.evaluate(0.0), poly(0.0), max_relative = 1e-4);
    }

    #[test]
    fn test_evaluate_matches_samples_for_cubic_input() {
        let samples = [1.0, 0.4, 0.1, 0.05, 0.3];
        let coeffs = fit_cubic(&samples).unwrap();

        // residuals exist but stay small against the sample scale
        for (tau, sample) in SAMPLE_OFFSETS_HOURS.iter().zip(samples.iter()) {
            assert!((coeffs.evaluate(*tau) - sample).abs() < 0.05);
        }
    }

    #[test]
    fn test_invalid_sample_count() {
        assert_eq!(
            fit_cubic(&[1.0, 2.0, 3.0]),
            Err(UmbraError::InvalidSampleCount {
                expected: 5,
                got: 3
            })
        );
        assert!(matches!(
            fit_cubic(&[0.0; 6]),
            Err(UmbraError::InvalidSampleCount { got: 6, .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let samples = [0.3, 0.2, 0.15, 0.2, 0.3];
        assert_eq!(fit_cubic(&samples).unwrap(), fit_cubic(&samples).unwrap());
    }
}
