//! # Ephemeris access layer
//!
//! This module defines the seam between the eclipse engine and whatever
//! supplies geocentric apparent positions:
//!
//! 1. [`Body`] — the two bodies the engine ever queries.
//! 2. [`ApparentPosition`] — geocentric apparent right ascension, declination
//!    and distance at an instant.
//! 3. [`EphemerisProvider`] — the trait every provider implements. The crate
//!    ships [`MeeusEphemeris`](crate::ephemeris::meeus::MeeusEphemeris), a
//!    closed-form implementation that needs no data files; a DE-file-backed
//!    provider would plug in at the same seam.
//!
//! Providers are deterministic functions of `(body, epoch)` over their
//! coverage window and must be reentrant: the engine may share one handle
//! across concurrent scans.

use hifitime::Epoch;
use serde::Serialize;

use crate::constants::{Degree, Kilometer, Radian};
use crate::umbra_errors::UmbraError;

pub mod delta_t;
pub mod lunar;
pub mod meeus;
pub mod nutation;
pub mod solar;

/// A solar-system body the eclipse engine can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Sun => write!(f, "Sun"),
            Body::Moon => write!(f, "Moon"),
        }
    }
}

/// Geocentric apparent place of a body at one instant.
///
/// Coordinates are referred to the true equator and equinox of date, so hour
/// angles formed against apparent sidereal time are internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApparentPosition {
    /// Apparent right ascension (radians)
    pub right_ascension: Radian,
    /// Apparent declination (radians)
    pub declination: Radian,
    /// Geocentric distance (kilometers)
    pub distance: Kilometer,
}

/// Source of geocentric apparent Sun/Moon positions, sidereal time, and ΔT.
///
/// Implementations fail with [`UmbraError::EphemerisUnavailable`] for any
/// instant outside their coverage window; they never retry, because a
/// deterministic lookup cannot succeed on a second attempt.
pub trait EphemerisProvider: Send + Sync {
    /// Apparent (RA, Dec, distance) of `body` as seen from Earth's geocenter.
    fn apparent_position(&self, body: Body, epoch: Epoch) -> Result<ApparentPosition, UmbraError>;

    /// Greenwich apparent sidereal time, in degrees normalized to [0, 360).
    fn sidereal_time(&self, epoch: Epoch) -> Result<Degree, UmbraError>;

    /// ΔT = TT − UT1 at the given instant, in seconds.
    fn delta_t(&self, epoch: Epoch) -> Result<f64, UmbraError>;
}
