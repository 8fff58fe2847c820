//! ΔT = TT − UT1 from the Espenak–Meeus piecewise polynomials.
//!
//! Each interval of years carries its own polynomial fit to the historical
//! record (with a parabolic extrapolation outside it); the dispatch below
//! covers −1999..+3000, which bounds the provider's coverage window.
//! Accuracy is a few seconds near the present day, which perturbs an
//! eclipse hour angle by under a tenth of an arcminute.

/// ΔT in seconds for a decimal year (e.g. 2024.27).
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 500.0 {
        let u = y / 100.0;
        10583.6
            + u * (-1014.41
                + u * (33.78311
                    + u * (-5.952053
                        + u * (-0.1798452 + u * (0.022174192 + u * 0.0090316521)))))
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        1574.2
            + u * (-556.01
                + u * (71.23472
                    + u * (0.319781
                        + u * (-0.8503463 + u * (-0.005050998 + u * 0.0083572073)))))
    } else if y < 1700.0 {
        let t = y - 1600.0;
        120.0 + t * (-0.9808 + t * (-0.01532 + t / 7129.0))
    } else if y < 1800.0 {
        let t = y - 1700.0;
        8.83 + t * (0.1603 + t * (-0.0059285 + t * (0.00013336 - t / 1_174_000.0)))
    } else if y < 1860.0 {
        let t = y - 1800.0;
        13.72
            + t * (-0.332447
                + t * (0.0068612
                    + t * (0.0041116
                        + t * (-0.00037436
                            + t * (0.0000121272 + t * (-0.0000001699 + t * 0.000000000875))))))
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + t * (0.5737 + t * (-0.251754 + t * (0.01680668 + t * (-0.0004473624 + t / 233_174.0))))
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + t * (1.494119 + t * (-0.0598939 + t * (0.0061966 - t * 0.000197)))
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + t * (0.84493 + t * (-0.076100 + t * 0.0020936))
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + t * (0.407 + t * (-1.0 / 233.0 + t / 2547.0))
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + t * (1.067 + t * (-1.0 / 260.0 - t / 718.0))
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86
            + t * (0.3345
                + t * (-0.060374 + t * (0.0017275 + t * (0.000651814 + t * 0.00002373599))))
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + t * (0.32217 + t * 0.005589)
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

#[cfg(test)]
mod delta_t_test {
    use super::*;

    #[test]
    fn test_modern_values() {
        // observed: ΔT ≈ 63.8 s in 2000, ≈ 69 s in the early 2020s;
        // the fit stays within a few seconds
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 0.5);
        let dt_2024 = delta_t_seconds(2024.3);
        assert!(dt_2024 > 64.0 && dt_2024 < 80.0, "got {dt_2024}");
    }

    #[test]
    fn test_historic_values() {
        // ΔT was around two minutes in the early 17th century
        let dt_1620 = delta_t_seconds(1620.0);
        assert!(dt_1620 > 90.0 && dt_1620 < 140.0, "got {dt_1620}");
    }

    #[test]
    fn test_piecewise_continuity() {
        // the published fits join to within a few seconds at every boundary
        for boundary in [
            -500.0, 500.0, 1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0,
            1986.0, 2005.0, 2150.0,
        ] {
            let below = delta_t_seconds(boundary - 1e-6);
            let above = delta_t_seconds(boundary + 1e-6);
            assert!(
                (below - above).abs() < 5.0,
                "jump of {} s at year {boundary}",
                (below - above).abs()
            );
        }
    }
}
