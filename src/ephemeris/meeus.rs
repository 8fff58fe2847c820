//! # Closed-form geocentric ephemeris provider
//!
//! [`MeeusEphemeris`] computes apparent Sun/Moon places of date, Greenwich
//! apparent sidereal time, and ΔT entirely from closed-form series, so the
//! eclipse engine runs without ephemeris files or network access.
//!
//! ## Overview
//!
//! - Solar longitude/distance: [`solar`](crate::ephemeris::solar)
//! - Lunar longitude/latitude/distance: [`lunar`](crate::ephemeris::lunar)
//! - Nutation and obliquity: [`nutation`](crate::ephemeris::nutation)
//! - ΔT: [`delta_t`](crate::ephemeris::delta_t)
//!
//! Apparent places add nutation in longitude (and annual aberration for the
//! Sun) to the geometric ecliptic coordinates, then rotate into equatorial
//! coordinates with the true obliquity. Sidereal time is the IAU 1982 GMST
//! plus the equation of the equinoxes, with UT1 derived from TT through the
//! provider's own ΔT model, keeping hour angles self-consistent.
//!
//! ## Coverage
//!
//! Queries are accepted for Gregorian years 1000–3000; outside that window
//! every method fails with
//! [`UmbraError::EphemerisUnavailable`](crate::umbra_errors::UmbraError).

use hifitime::Epoch;

use crate::constants::{Degree, Radian, SECONDS_PER_DAY};
use crate::ephemeris::{delta_t, lunar, nutation, solar, ApparentPosition, Body, EphemerisProvider};
use crate::time::{gmst, julian_centuries_tt};
use crate::umbra_errors::UmbraError;

/// First Gregorian year of the coverage window.
pub const COVERAGE_FIRST_YEAR: i32 = 1000;
/// Last Gregorian year of the coverage window.
pub const COVERAGE_LAST_YEAR: i32 = 3000;

/// Closed-form apparent ephemeris of the Sun and Moon.
///
/// The struct is stateless and therefore trivially reentrant; one instance
/// can back any number of concurrent scans.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusEphemeris;

impl MeeusEphemeris {
    pub fn new() -> Self {
        MeeusEphemeris
    }

    /// Reject instants outside the coverage window.
    fn check_coverage(&self, epoch: Epoch) -> Result<(), UmbraError> {
        let (year, ..) = epoch.to_gregorian_utc();
        if !(COVERAGE_FIRST_YEAR..=COVERAGE_LAST_YEAR).contains(&year) {
            return Err(UmbraError::EphemerisUnavailable {
                epoch: epoch.to_string(),
                reason: format!(
                    "year {year} outside coverage {COVERAGE_FIRST_YEAR}..{COVERAGE_LAST_YEAR}"
                ),
            });
        }
        Ok(())
    }

    /// Decimal year used by the ΔT fit (year + centered month fraction).
    fn decimal_year(epoch: Epoch) -> f64 {
        let (year, month, ..) = epoch.to_gregorian_utc();
        year as f64 + (month as f64 - 0.5) / 12.0
    }

    /// Rotate apparent ecliptic coordinates of date into equatorial ones.
    ///
    /// All inputs in degrees; output (RA, Dec) in radians with RA normalized
    /// to [0, 2π).
    fn ecliptic_to_equatorial(lon: Degree, lat: Degree, obliquity: Degree) -> (Radian, Radian) {
        let (lambda, beta, eps) = (lon.to_radians(), lat.to_radians(), obliquity.to_radians());

        let ra = (lambda.sin() * eps.cos() - beta.tan() * eps.sin())
            .atan2(lambda.cos())
            .rem_euclid(std::f64::consts::TAU);
        let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin()).asin();

        (ra, dec)
    }
}

impl EphemerisProvider for MeeusEphemeris {
    fn apparent_position(&self, body: Body, epoch: Epoch) -> Result<ApparentPosition, UmbraError> {
        self.check_coverage(epoch)?;
        let c = julian_centuries_tt(epoch);
        let (dpsi, _) = nutation::nutation(c);
        let eps = nutation::true_obliquity(c);

        let (lon, lat, distance) = match body {
            Body::Sun => {
                let lon = solar::geometric_longitude(c) + solar::aberration(c) + dpsi;
                (lon, 0.0, solar::distance_km(c))
            }
            Body::Moon => {
                let lon = lunar::geometric_longitude(c) + dpsi;
                (lon, lunar::latitude(c), lunar::distance_km(c))
            }
        };

        let (right_ascension, declination) = Self::ecliptic_to_equatorial(lon, lat, eps);

        Ok(ApparentPosition {
            right_ascension,
            declination,
            distance,
        })
    }

    fn sidereal_time(&self, epoch: Epoch) -> Result<Degree, UmbraError> {
        self.check_coverage(epoch)?;
        let c = julian_centuries_tt(epoch);
        let (dpsi, _) = nutation::nutation(c);
        let eps = nutation::true_obliquity(c);

        let dt = delta_t::delta_t_seconds(Self::decimal_year(epoch));
        let mjd_ut1 = epoch.to_mjd_tt_days() - dt / SECONDS_PER_DAY;

        // equation of the equinoxes converts mean into apparent sidereal time
        let gast = gmst(mjd_ut1) + (dpsi * eps.to_radians().cos()).to_radians();
        Ok(gast.to_degrees().rem_euclid(360.0))
    }

    fn delta_t(&self, epoch: Epoch) -> Result<f64, UmbraError> {
        self.check_coverage(epoch)?;
        Ok(delta_t::delta_t_seconds(Self::decimal_year(epoch)))
    }
}
