//! Dense scan for the instant of minimum Sun–Moon separation.
//!
//! The separation-vs-time curve near an eclipse is smooth and slow-varying,
//! so a brute-force sweep at one-second resolution already localizes the
//! extremum far more finely than eclipse durations require; no bracketed
//! minimizer is involved.

use hifitime::{Duration, Epoch, TimeSeries};
use itertools::Itertools;
use serde::Serialize;

use crate::constants::Radian;
use crate::eclipse::separation::SeparationCheck;
use crate::ephemeris::EphemerisProvider;
use crate::umbra_errors::UmbraError;

/// Refined extremum over a search window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinimumSeparation {
    /// Instant of minimum angular separation
    pub epoch: Epoch,
    /// The minimum separation itself (radians)
    pub separation: Radian,
}

/// Scan `[window_start, window_end]` at `step` resolution and return the
/// eclipse-possible instant of globally minimal separation.
///
/// Only instants satisfying the eclipse-possible condition are candidates;
/// among equal minima the earliest instant wins. Fails with
/// [`UmbraError::NoEclipseInWindow`] when no instant qualifies (a
/// coarse-scan false positive, which the caller skips) and propagates
/// provider failures unchanged.
pub fn refine<P: EphemerisProvider>(
    provider: &P,
    window_start: Epoch,
    window_end: Epoch,
    step: Duration,
) -> Result<MinimumSeparation, UmbraError> {
    let mut candidates: Vec<MinimumSeparation> = Vec::new();

    for epoch in TimeSeries::inclusive(window_start, window_end, step) {
        let check = SeparationCheck::evaluate(provider, epoch)?;
        if check.is_eclipse_possible() {
            candidates.push(MinimumSeparation {
                epoch,
                separation: check.separation,
            });
        }
    }

    candidates
        .iter()
        .position_min_by(|a, b| a.separation.total_cmp(&b.separation))
        .map(|idx| candidates[idx])
        .ok_or_else(|| UmbraError::NoEclipseInWindow {
            start: window_start.to_string(),
            end: window_end.to_string(),
        })
}
