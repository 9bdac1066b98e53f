use crate::chain::MetricSeries;
use crate::error::StatsError;
use crate::stats::{SummaryStatistics, VarianceConvention};

/// One row of a thinning sweep: the interval plus either statistics for the
/// thinned chain or the error that interval produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry {
    pub interval: usize,
    pub stats: Result<SummaryStatistics, StatsError>,
}

/// Summarize `series` at each candidate thinning interval (offset 0).
///
/// A failing interval, say one that leaves too few samples for the sample
/// variance, yields an error in its own entry; the other intervals still
/// report. Stability of the mean and variance across rows is the informal
/// convergence check: if they move materially with the interval, the chain
/// is too short or too correlated for the estimates to be trusted.
pub fn thinning_sweep(
    series: &MetricSeries,
    intervals: &[usize],
    convention: VarianceConvention,
) -> Vec<SweepEntry> {
    intervals
        .iter()
        .map(|&interval| SweepEntry {
            interval,
            stats: series
                .thin(interval, 0)
                .and_then(|thinned| SummaryStatistics::from_series(&thinned, convention)),
        })
        .collect()
}
