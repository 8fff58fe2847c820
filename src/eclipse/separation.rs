//! Sun–Moon angular separation and the eclipse-possible threshold.
//!
//! The threshold enlarges the Moon's disk by one Earth radius and shrinks
//! the Sun's by the same amount — a parallax-type correction that bounds the
//! geocentric separations at which some point on Earth can still see the
//! disks overlap. Both distances come from the same instant's ephemeris
//! query, so the pair is a pure function of the instant.

use hifitime::Epoch;
use serde::Serialize;

use crate::constants::{Radian, EARTH_RADIUS_KM, MOON_RADIUS_KM, SUN_RADIUS_KM};
use crate::eclipse::radec_unit_vector;
use crate::ephemeris::{Body, EphemerisProvider};
use crate::umbra_errors::UmbraError;

/// Result of one separation evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeparationCheck {
    /// Great-circle angle between the apparent Sun and Moon directions (radians)
    pub separation: Radian,
    /// Largest separation at which an eclipse is geometrically possible (radians)
    pub threshold: Radian,
}

impl SeparationCheck {
    /// Evaluate separation and threshold at one instant.
    ///
    /// Fails with [`UmbraError::EphemerisUnavailable`] under the same
    /// conditions as any other provider query; there is no other failure
    /// mode, since the threshold's arcsine arguments stay well inside
    /// [−1, 1] for physical Sun/Moon distances.
    pub fn evaluate<P: EphemerisProvider>(provider: &P, epoch: Epoch) -> Result<Self, UmbraError> {
        let sun = provider.apparent_position(Body::Sun, epoch)?;
        let moon = provider.apparent_position(Body::Moon, epoch)?;

        let sun_dir = radec_unit_vector(sun.right_ascension, sun.declination);
        let moon_dir = radec_unit_vector(moon.right_ascension, moon.declination);
        let separation = sun_dir.dot(&moon_dir).clamp(-1.0, 1.0).acos();

        let threshold = ((MOON_RADIUS_KM + EARTH_RADIUS_KM) / moon.distance).asin()
            + ((SUN_RADIUS_KM - EARTH_RADIUS_KM) / sun.distance).asin();

        Ok(SeparationCheck {
            separation,
            threshold,
        })
    }

    /// Whether an eclipse is geometrically possible at this instant.
    pub fn is_eclipse_possible(&self) -> bool {
        self.separation <= self.threshold
    }
}
