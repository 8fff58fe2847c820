//! # Besselian elements of a solar eclipse
//!
//! [`BesselianElements::compute`] turns the apparent Sun/Moon places at one
//! instant into the standard parameterization of the Moon's shadow relative
//! to Earth's fundamental plane: shadow coordinates (x, y), shadow-axis
//! declination d, penumbral/umbral limit distances l1/l2, the hour-angle
//! element u, and the two cone tangents tan f1/tan f2.
//!
//! [`BesselianPolynomials::compute`] runs the full pipeline for a given
//! eclipse maximum: elements at the five instants of a [`SampleWindow`],
//! then a least-squares cubic per element for continuous-time interpolation
//! over roughly ±2 h.
//!
//! ## Geometry
//!
//! Both bodies are converted to geocentric rectangular coordinates in Earth
//! radii. The Moon→Sun difference vector defines the shadow axis; its
//! azimuth uses the quadrant-correct two-argument arctangent so the
//! fundamental-plane frame cannot mirror when the axis crosses the
//! equinoctial colure. The Moon's coordinates are then rotated into the
//! axis frame, and the cone half-angles follow from the body radii and the
//! Sun–Moon distance.

use hifitime::{Duration, Epoch};
use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::{
    km_to_earth_radii, Degree, EarthRadii, MIN_AXIS_NORM_ER, MOON_RADIUS_ER, SUN_RADIUS_ER,
};
use crate::eclipse::polynomial::{fit_cubic, CubicCoefficients, SAMPLE_COUNT};
use crate::ephemeris::{Body, EphemerisProvider};
use crate::umbra_errors::UmbraError;

/// Geocentric rectangular coordinates of a body, Earth radii.
#[inline]
fn rectangular(ra: f64, dec: f64, distance_er: EarthRadii) -> Vector3<f64> {
    Vector3::new(
        distance_er * dec.cos() * ra.cos(),
        distance_er * dec.cos() * ra.sin(),
        distance_er * dec.sin(),
    )
}

/// Besselian elements at one instant.
///
/// Angles d and u are in degrees to match the form the elements are
/// conventionally published in; x, y, l1, l2 are in Earth equatorial radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BesselianElements {
    /// Shadow x-coordinate on the fundamental plane (Earth radii)
    pub x: EarthRadii,
    /// Shadow y-coordinate on the fundamental plane (Earth radii)
    pub y: EarthRadii,
    /// Declination of the shadow axis (degrees)
    pub d: Degree,
    /// Distance to the northern penumbral limit (Earth radii)
    pub l1: EarthRadii,
    /// Distance to the southern umbral limit (Earth radii)
    pub l2: EarthRadii,
    /// Hour angle of the Sun minus the shadow-axis angle (degrees)
    pub u: Degree,
    /// Tangent of the penumbral cone half-angle
    pub tan_f1: f64,
    /// Tangent of the umbral cone half-angle
    pub tan_f2: f64,
}

impl BesselianElements {
    /// Compute the Besselian elements for one instant.
    ///
    /// Arguments
    /// ---------
    /// * `provider`: ephemeris source for apparent places and sidereal time.
    /// * `epoch`: the UTC instant to characterize.
    ///
    /// Return
    /// ------
    /// * The element set, or [`UmbraError::EphemerisUnavailable`] if the
    ///   provider cannot resolve the instant, or
    ///   [`UmbraError::DegenerateGeometry`] if the Moon→Sun vector is too
    ///   short to define a shadow axis.
    pub fn compute<P: EphemerisProvider>(provider: &P, epoch: Epoch) -> Result<Self, UmbraError> {
        let sun = provider.apparent_position(Body::Sun, epoch)?;
        let moon = provider.apparent_position(Body::Moon, epoch)?;

        let sun_vec = rectangular(
            sun.right_ascension,
            sun.declination,
            km_to_earth_radii(sun.distance),
        );
        let moon_distance_er = km_to_earth_radii(moon.distance);
        let moon_vec = rectangular(moon.right_ascension, moon.declination, moon_distance_er);

        // Moon→Sun vector: the direction light travels along the shadow axis
        let axis = sun_vec - moon_vec;
        let g = axis.norm();
        if g < MIN_AXIS_NORM_ER {
            return Err(UmbraError::DegenerateGeometry { norm: g });
        }

        // shadow-axis right ascension and declination
        let a = axis.y.atan2(axis.x);
        let d = (axis.z / g).asin();

        // hour angle of the axis against apparent sidereal time
        let gast = provider.sidereal_time(epoch)?.to_radians();
        let u = gast - a;

        // rotate the Moon into the shadow-axis frame: x east, y toward the
        // axis pole, z along the axis
        let (al, dl) = (moon.right_ascension, moon.declination);
        let x = moon_distance_er * (dl.cos() * (al - a).sin());
        let y = moon_distance_er * (dl.sin() * d.cos() - dl.cos() * d.sin() * (al - a).cos());
        let z = moon_distance_er * (dl.sin() * d.sin() + dl.cos() * d.cos() * (al - a).cos());

        // penumbral/umbral cone half-angles from the body radii
        let sin_f1 = (SUN_RADIUS_ER + MOON_RADIUS_ER) / g;
        let sin_f2 = (SUN_RADIUS_ER - MOON_RADIUS_ER) / g;
        let tan_f1 = sin_f1.asin().tan();
        let tan_f2 = sin_f2.asin().tan();

        // z-offsets of the cone vertices and the limit distances on the
        // fundamental plane
        let c1 = z + MOON_RADIUS_ER / sin_f1;
        let c2 = z - MOON_RADIUS_ER / sin_f2;
        let l1 = c1 * tan_f1;
        let l2 = c2 * tan_f2;

        Ok(BesselianElements {
            x,
            y,
            d: d.to_degrees(),
            l1,
            l2,
            u: u.to_degrees(),
            tan_f1,
            tan_f2,
        })
    }
}

/// The five instants feeding the polynomial fit: the central instant and its
/// ±1 h, ±2 h neighbors, in time order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleWindow {
    instants: [Epoch; SAMPLE_COUNT],
}

impl SampleWindow {
    /// Build the window centered on `center`.
    pub fn centered(center: Epoch) -> Self {
        let hour = Duration::from_hours(1.0);
        let two_hours = Duration::from_hours(2.0);
        SampleWindow {
            instants: [
                center - two_hours,
                center - hour,
                center,
                center + hour,
                center + two_hours,
            ],
        }
    }

    /// The central instant (the eclipse-maximum estimate).
    pub fn center(&self) -> Epoch {
        self.instants[2]
    }

    /// All five instants in time order.
    pub fn instants(&self) -> &[Epoch; SAMPLE_COUNT] {
        &self.instants
    }
}

/// Terminal artifact of the Besselian pipeline: the raw samples, one cubic
/// per element, the central cone tangents, and the ΔT in force.
#[derive(Debug, Clone, Serialize)]
pub struct BesselianPolynomials {
    /// Central instant the coefficients are referred to
    pub reference_epoch: Epoch,
    /// Raw element sets at the five window instants
    pub samples: [BesselianElements; SAMPLE_COUNT],
    /// Cubic for the shadow x-coordinate
    pub x: CubicCoefficients,
    /// Cubic for the shadow y-coordinate
    pub y: CubicCoefficients,
    /// Cubic for the shadow-axis declination (degrees)
    pub d: CubicCoefficients,
    /// Cubic for the northern penumbral limit distance
    pub l1: CubicCoefficients,
    /// Cubic for the southern umbral limit distance
    pub l2: CubicCoefficients,
    /// Cubic for the hour-angle element u (degrees)
    pub mu: CubicCoefficients,
    /// Penumbral cone tangent at the central instant
    pub tan_f1: f64,
    /// Umbral cone tangent at the central instant
    pub tan_f2: f64,
    /// ΔT = TT − UT1 used for the central instant (seconds)
    pub delta_t: f64,
}

impl BesselianPolynomials {
    /// Run the full pipeline around an eclipse-maximum estimate.
    ///
    /// Computes the element sets at the five [`SampleWindow`] instants and
    /// fits one cubic per element. Any provider failure or degenerate
    /// geometry aborts the pipeline; there is no surrounding scan to absorb
    /// a bad instant here.
    pub fn compute<P: EphemerisProvider>(provider: &P, center: Epoch) -> Result<Self, UmbraError> {
        let window = SampleWindow::centered(center);
        let instants = window.instants();

        let samples = [
            BesselianElements::compute(provider, instants[0])?,
            BesselianElements::compute(provider, instants[1])?,
            BesselianElements::compute(provider, instants[2])?,
            BesselianElements::compute(provider, instants[3])?,
            BesselianElements::compute(provider, instants[4])?,
        ];

        let column = |f: fn(&BesselianElements) -> f64| -> Result<CubicCoefficients, UmbraError> {
            let values: Vec<f64> = samples.iter().map(f).collect();
            fit_cubic(&values)
        };

        Ok(BesselianPolynomials {
            reference_epoch: center,
            x: column(|e| e.x)?,
            y: column(|e| e.y)?,
            d: column(|e| e.d)?,
            l1: column(|e| e.l1)?,
            l2: column(|e| e.l2)?,
            mu: column(|e| e.u)?,
            tan_f1: samples[2].tan_f1,
            tan_f2: samples[2].tan_f2,
            delta_t: provider.delta_t(center)?,
            samples,
        })
    }
}

#[cfg(test)]
mod besselian_test {
    use super::*;
    use crate::ephemeris::meeus::MeeusEphemeris;

    #[test]
    fn test_sample_window_offsets() {
        let center = Epoch::from_gregorian_utc(2024, 4, 8, 18, 17, 21, 0);
        let window = SampleWindow::centered(center);
        let hour = Duration::from_hours(1.0);

        assert_eq!(window.center(), center);
        let instants = window.instants();
        assert_eq!(instants[0], center - Duration::from_hours(2.0));
        assert_eq!(instants[4], center + Duration::from_hours(2.0));
        // strictly increasing, exactly equally spaced
        for pair in instants.windows(2) {
            assert_eq!(pair[1] - pair[0], hour);
        }
    }

    #[test]
    fn test_compute_deterministic() {
        let eph = MeeusEphemeris::new();
        let epoch = Epoch::from_gregorian_utc(2024, 4, 8, 18, 0, 0, 0);
        let a = BesselianElements::compute(&eph, epoch).unwrap();
        let b = BesselianElements::compute(&eph, epoch).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cone_tangents_near_eclipse() {
        let eph = MeeusEphemeris::new();
        let epoch = Epoch::from_gregorian_utc(2024, 4, 8, 18, 17, 21, 0);
        let elements = BesselianElements::compute(&eph, epoch).unwrap();

        // the penumbral cone opens slightly wider than the umbral one, and
        // both half-angles are about a quarter degree
        assert!(elements.tan_f1 > elements.tan_f2);
        assert!(elements.tan_f1 > 0.0040 && elements.tan_f1 < 0.0050);
        assert!(elements.tan_f2 > 0.0040 && elements.tan_f2 < 0.0050);
    }

    #[test]
    fn test_ephemeris_failure_propagates() {
        let eph = MeeusEphemeris::new();
        let epoch = Epoch::from_gregorian_utc(999, 6, 1, 0, 0, 0, 0);
        assert!(matches!(
            BesselianElements::compute(&eph, epoch),
            Err(UmbraError::EphemerisUnavailable { .. })
        ));
        assert!(matches!(
            BesselianPolynomials::compute(&eph, epoch),
            Err(UmbraError::EphemerisUnavailable { .. })
        ));
    }
}
