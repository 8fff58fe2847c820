use thiserror::Error;

/// Crate-wide error type.
///
/// Every failure is a deterministic function of its input, so none of these
/// variants is retryable: callers either skip the offending instant (the
/// coarse scanner does this for [`UmbraError::EphemerisUnavailable`] and
/// [`UmbraError::NoEclipseInWindow`]) or surface the error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UmbraError {
    /// The queried instant lies outside the ephemeris coverage window, or the
    /// provider failed to resolve it.
    #[error("ephemeris unavailable at {epoch}: {reason}")]
    EphemerisUnavailable { epoch: String, reason: String },

    /// The Moon→Sun separation vector has near-zero magnitude, leaving the
    /// shadow-axis direction undefined.
    #[error("degenerate shadow-axis geometry: Moon-Sun vector norm {norm} Earth radii")]
    DegenerateGeometry { norm: f64 },

    /// The polynomial fitter was handed a sample set of the wrong length.
    #[error("invalid sample count: expected {expected}, got {got}")]
    InvalidSampleCount { expected: usize, got: usize },

    /// The dense refinement scan found no instant satisfying the
    /// eclipse-possible condition (a coarse-scan false positive).
    #[error("no eclipse-possible instant in window [{start}, {end}]")]
    NoEclipseInWindow { start: String, end: String },

    /// A finder parameter failed builder validation.
    #[error("invalid finder parameter: {0}")]
    InvalidFinderParameter(String),

    /// The least-squares solver could not produce coefficients. With the
    /// fixed full-rank design matrix this indicates non-finite input samples.
    #[error("least-squares fit failed: {0}")]
    FitFailed(String),
}
