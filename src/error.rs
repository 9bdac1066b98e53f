//! Typed error kinds for chain statistics.

use thiserror::Error;

/// Errors produced by thinning and summary-statistics computations.
///
/// Every error is attributable to a single statistic or sweep entry; batch
/// operations report these per entry instead of aborting (see
/// [`crate::thinning_sweep`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Thinning interval or offset outside the allowed range.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// Fewer samples than the requested statistic requires.
    #[error("insufficient data: need at least {needed} samples, have {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Zero-length input where at least one sample is required.
    #[error("empty series: at least one sample required")]
    EmptySeries,
}
