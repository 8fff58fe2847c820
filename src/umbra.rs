//! # Umbra: ephemeris handle and eclipse pipelines
//!
//! This module defines the [`Umbra`](crate::umbra::Umbra) struct, the facade that wires together:
//!
//! 1. **The ephemeris provider** — acquired once per run and injected into
//!    every computation, so no component reloads or re-resolves it.
//! 2. **Search parameters** ([`FinderParams`](crate::eclipse::FinderParams)) — the coarse/fine scan tuning.
//! 3. **The two pipelines** — the lazy eclipse search and the single-maximum
//!    Besselian polynomial generation.
//!
//! ## Typical usage
//!
//! ```
//! use hifitime::Epoch;
//! use umbra::umbra::Umbra;
//!
//! let umbra = Umbra::new();
//!
//! // Besselian polynomial table for the 2024-04-08 total eclipse
//! let t0 = Epoch::from_gregorian_utc(2024, 4, 8, 18, 17, 21, 0);
//! let table = umbra.besselian_polynomials(t0).unwrap();
//! assert!(table.tan_f1 > table.tan_f2);
//! ```
//!
//! ## See also
//! ------------
//! * [`EclipseFinder`](crate::eclipse::EclipseFinder) – The lazy scan the facade configures.
//! * [`BesselianPolynomials`](crate::eclipse::BesselianPolynomials) – The pipeline's terminal artifact.
//! * [`MeeusEphemeris`](crate::ephemeris::meeus::MeeusEphemeris) – The default provider.

use hifitime::Epoch;

use crate::eclipse::{
    BesselianElements, BesselianPolynomials, EclipseFinder, FinderParams, SeparationCheck,
};
use crate::ephemeris::meeus::MeeusEphemeris;
use crate::ephemeris::EphemerisProvider;
use crate::umbra_errors::UmbraError;

/// Facade owning one ephemeris handle and the scan configuration.
#[derive(Debug, Clone)]
pub struct Umbra<P: EphemerisProvider = MeeusEphemeris> {
    ephemeris: P,
    params: FinderParams,
}

impl Umbra<MeeusEphemeris> {
    /// Facade over the built-in closed-form ephemeris with default scan
    /// parameters.
    pub fn new() -> Self {
        Umbra {
            ephemeris: MeeusEphemeris::new(),
            params: FinderParams::default(),
        }
    }
}

impl Default for Umbra<MeeusEphemeris> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EphemerisProvider> Umbra<P> {
    /// Facade over a caller-supplied provider (e.g. a DE-file-backed one)
    /// and scan parameters.
    pub fn with_provider(ephemeris: P, params: FinderParams) -> Self {
        Umbra { ephemeris, params }
    }

    /// The injected ephemeris handle.
    pub fn ephemeris(&self) -> &P {
        &self.ephemeris
    }

    /// The scan parameters in force.
    pub fn params(&self) -> &FinderParams {
        &self.params
    }

    /// Lazy scan of `[start, end]` for eclipse maxima, in increasing time
    /// order.
    pub fn find_eclipses(&self, start: Epoch, end: Epoch) -> EclipseFinder<'_, P> {
        EclipseFinder::new(&self.ephemeris, start, end, self.params)
    }

    /// Besselian elements at one instant.
    pub fn besselian_elements(&self, epoch: Epoch) -> Result<BesselianElements, UmbraError> {
        BesselianElements::compute(&self.ephemeris, epoch)
    }

    /// Full polynomial pipeline around an eclipse-maximum estimate.
    pub fn besselian_polynomials(
        &self,
        center: Epoch,
    ) -> Result<BesselianPolynomials, UmbraError> {
        BesselianPolynomials::compute(&self.ephemeris, center)
    }

    /// Separation and eclipse-possible threshold at one instant.
    pub fn separation(&self, epoch: Epoch) -> Result<SeparationCheck, UmbraError> {
        SeparationCheck::evaluate(&self.ephemeris, epoch)
    }
}

#[cfg(test)]
mod umbra_test {
    use super::*;
    use hifitime::Duration;

    #[test]
    fn test_facade_pipelines_agree_with_components() {
        let umbra = Umbra::new();
        let epoch = Epoch::from_gregorian_utc(2024, 4, 8, 18, 0, 0, 0);

        let direct = BesselianElements::compute(umbra.ephemeris(), epoch).unwrap();
        assert_eq!(umbra.besselian_elements(epoch).unwrap(), direct);
    }

    #[test]
    fn test_custom_params_flow_into_finder() {
        let params = FinderParams::builder()
            .skip_ahead(Duration::from_days(26.0))
            .build()
            .unwrap();
        let umbra = Umbra::with_provider(MeeusEphemeris::new(), params);
        assert_eq!(umbra.params().skip_ahead, Duration::from_days(26.0));
    }
}
