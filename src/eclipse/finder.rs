//! # Coarse eclipse scan
//!
//! [`EclipseFinder`] walks a date range in fixed coarse increments, asking
//! [`SeparationCheck`] whether an eclipse is geometrically possible at each
//! cursor position. On a hit it hands a short window around the cursor to
//! the dense [`refine`](crate::eclipse::refiner::refine) scan, yields the
//! refined minimum, and jumps the cursor ahead by roughly one synodic month
//! so the same event is not detected twice.
//!
//! The finder is a lazy [`Iterator`]: no work happens until the caller pulls
//! the next result, and results come out in strictly increasing time order.
//! Individual evaluation failures (an instant outside ephemeris coverage, a
//! refinement window that turns out to hold no eclipse) are logged and
//! skipped rather than aborting the scan.
//!
//! ## Tuning
//!
//! All scan parameters live in [`FinderParams`]. The defaults replicate the
//! classical search: a 2-hour coarse step, a refinement window stretching
//! 2 h back and 4 h forward of the hit, a 27-day skip (a deliberate
//! under-shoot of the 29.5-day synodic month, trading a few wasted coarse
//! steps for immunity to missing a close follower), and 1-second refinement.

use hifitime::{Duration, Epoch};
use log::{debug, warn};

use crate::eclipse::refiner::{refine, MinimumSeparation};
use crate::eclipse::separation::SeparationCheck;
use crate::ephemeris::EphemerisProvider;
use crate::umbra_errors::UmbraError;

/// Tunable parameters of the coarse/fine eclipse search.
///
/// ```
/// use umbra::eclipse::FinderParams;
/// use hifitime::Duration;
///
/// let params = FinderParams::builder()
///     .coarse_step(Duration::from_hours(1.0))
///     .skip_ahead(Duration::from_days(26.0))
///     .build()
///     .unwrap();
/// assert_eq!(params.skip_ahead, Duration::from_days(26.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderParams {
    /// Coarse-scan cursor increment.
    pub coarse_step: Duration,
    /// How far the refinement window reaches back from a coarse hit.
    pub refine_back: Duration,
    /// How far the refinement window reaches forward of a coarse hit.
    pub refine_forward: Duration,
    /// Cursor jump after a confirmed detection, skipping the rest of the
    /// lunation.
    pub skip_ahead: Duration,
    /// Step of the dense refinement scan.
    pub fine_step: Duration,
}

impl FinderParams {
    /// Construct params with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`FinderParamsBuilder`] for custom parameters with
    /// validation.
    pub fn builder() -> FinderParamsBuilder {
        FinderParamsBuilder::new()
    }
}

impl Default for FinderParams {
    fn default() -> Self {
        FinderParams {
            coarse_step: Duration::from_hours(2.0),
            refine_back: Duration::from_hours(2.0),
            refine_forward: Duration::from_hours(4.0),
            skip_ahead: Duration::from_days(27.0),
            fine_step: Duration::from_seconds(1.0),
        }
    }
}

/// Builder for [`FinderParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct FinderParamsBuilder {
    params: FinderParams,
}

impl FinderParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: FinderParams::default(),
        }
    }

    pub fn coarse_step(mut self, v: Duration) -> Self {
        self.params.coarse_step = v;
        self
    }
    pub fn refine_back(mut self, v: Duration) -> Self {
        self.params.refine_back = v;
        self
    }
    pub fn refine_forward(mut self, v: Duration) -> Self {
        self.params.refine_forward = v;
        self
    }
    pub fn skip_ahead(mut self, v: Duration) -> Self {
        self.params.skip_ahead = v;
        self
    }
    pub fn fine_step(mut self, v: Duration) -> Self {
        self.params.fine_step = v;
        self
    }

    /// Validate and return the parameter set.
    pub fn build(self) -> Result<FinderParams, UmbraError> {
        let p = &self.params;
        let zero = Duration::ZERO;

        if p.coarse_step <= zero {
            return Err(UmbraError::InvalidFinderParameter(
                "coarse_step must be positive".into(),
            ));
        }
        if p.fine_step <= zero {
            return Err(UmbraError::InvalidFinderParameter(
                "fine_step must be positive".into(),
            ));
        }
        if p.refine_back < zero || p.refine_forward < zero {
            return Err(UmbraError::InvalidFinderParameter(
                "refinement window extents must be non-negative".into(),
            ));
        }
        if p.refine_back + p.refine_forward < p.fine_step {
            return Err(UmbraError::InvalidFinderParameter(
                "refinement window must span at least one fine step".into(),
            ));
        }
        // the skip must clear the refinement window, or the same event could
        // be re-entered on the next coarse step
        if p.skip_ahead <= p.refine_forward {
            return Err(UmbraError::InvalidFinderParameter(
                "skip_ahead must exceed refine_forward".into(),
            ));
        }

        Ok(self.params)
    }
}

/// Lazy coarse-to-fine eclipse search over `[start, end]`.
///
/// Yields one [`MinimumSeparation`] per detected eclipse event, in strictly
/// increasing time order. The only state between pulls is the cursor.
#[derive(Debug, Clone)]
pub struct EclipseFinder<'a, P: EphemerisProvider> {
    provider: &'a P,
    params: FinderParams,
    cursor: Epoch,
    end: Epoch,
}

impl<'a, P: EphemerisProvider> EclipseFinder<'a, P> {
    /// Set up a scan of `[start, end]` with the given parameters.
    pub fn new(provider: &'a P, start: Epoch, end: Epoch, params: FinderParams) -> Self {
        EclipseFinder {
            provider,
            params,
            cursor: start,
            end,
        }
    }

    /// The cursor's current position; after a detection this sits one
    /// skip-ahead past the hit.
    pub fn cursor(&self) -> Epoch {
        self.cursor
    }
}

impl<P: EphemerisProvider> Iterator for EclipseFinder<'_, P> {
    type Item = MinimumSeparation;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor <= self.end {
            let probe = self.cursor;
            self.cursor = probe + self.params.coarse_step;

            let check = match SeparationCheck::evaluate(self.provider, probe) {
                Ok(check) => check,
                Err(err) => {
                    // a failed instant must not abort the scan
                    warn!("skipping coarse probe at {probe}: {err}");
                    continue;
                }
            };

            if !check.is_eclipse_possible() {
                continue;
            }

            let window_start = probe - self.params.refine_back;
            let window_end = probe + self.params.refine_forward;
            match refine(
                self.provider,
                window_start,
                window_end,
                self.params.fine_step,
            ) {
                Ok(minimum) => {
                    // jump past the rest of this lunation before resuming
                    self.cursor = probe + self.params.skip_ahead + self.params.coarse_step;
                    return Some(minimum);
                }
                Err(err @ UmbraError::NoEclipseInWindow { .. }) => {
                    // coarse-scan false positive: resume stepping
                    debug!("refinement found nothing around {probe}: {err}");
                }
                Err(err) => {
                    warn!("refinement failed around {probe}: {err}");
                }
            }
        }
        None
    }
}
