//! Nutation and obliquity of the ecliptic.
//!
//! The compact lunisolar approximation below keeps the four dominant
//! nutation terms (node, 2×solar longitude, 2×lunar longitude, 2×node),
//! good to ~0.5″ — ample for shadow-axis work, where 1″ moves the
//! fundamental-plane coordinates by under 3e-4 Earth radii.

use crate::constants::Degree;

/// Nutation in longitude (Δψ) and obliquity (Δε), both in degrees.
///
/// `c` is Julian centuries of TT since J2000.0.
pub fn nutation(c: f64) -> (Degree, Degree) {
    // longitude of the ascending node of the lunar orbit
    let omega = (125.04452 - 1934.136261 * c).to_radians();
    // mean longitudes of the Sun and Moon
    let l_sun = (280.4665 + 36000.7698 * c).to_radians();
    let l_moon = (218.3165 + 481267.8813 * c).to_radians();

    let dpsi = (-17.20 * omega.sin()
        - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin())
        / 3600.0;

    let deps = (9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos())
        / 3600.0;

    (dpsi, deps)
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial).
pub fn mean_obliquity(c: f64) -> Degree {
    23.0 + 26.0 / 60.0
        + 21.448 / 3600.0
        + c * (-46.8150 / 3600.0 + c * (-0.00059 / 3600.0 + c * (0.001813 / 3600.0)))
}

/// True obliquity: mean obliquity plus the nutation in obliquity, degrees.
pub fn true_obliquity(c: f64) -> Degree {
    let (_, deps) = nutation(c);
    mean_obliquity(c) + deps
}

#[cfg(test)]
mod nutation_test {
    use super::*;

    #[test]
    fn test_mean_obliquity_j2000() {
        // ε₀ = 23°26′21.448″ at J2000.0
        let eps = mean_obliquity(0.0);
        assert!((eps - 23.4392911).abs() < 1e-6);
    }

    #[test]
    fn test_nutation_magnitudes() {
        // Δψ stays within ±20″, Δε within ±10″ over a few decades
        for i in -20..20 {
            let c = i as f64 * 0.02;
            let (dpsi, deps) = nutation(c);
            assert!(dpsi.abs() < 20.0 / 3600.0);
            assert!(deps.abs() < 10.0 / 3600.0);
        }
    }

    #[test]
    fn test_obliquity_slowly_decreasing() {
        assert!(mean_obliquity(1.0) < mean_obliquity(0.0));
        assert!(mean_obliquity(0.0) < mean_obliquity(-1.0));
    }
}
