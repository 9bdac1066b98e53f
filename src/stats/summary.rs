use crate::chain::MetricSeries;
use crate::error::StatsError;

/// Which divisor the variance uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VarianceConvention {
    /// Bessel-corrected sample variance, divisor `n - 1`. Needs `n >= 2`.
    #[default]
    Sample,
    /// Population variance, divisor `n`. Defined for `n >= 1`.
    Population,
}

/// Immutable summary of a metric series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub convention: VarianceConvention,
}

impl SummaryStatistics {
    /// Summarize a slice of samples.
    ///
    /// Mean and variance are computed in two passes; the squared-deviation
    /// form avoids the cancellation the naive sum-of-squares formula hits on
    /// long chains. Fails with [`StatsError::EmptySeries`] on empty input and
    /// with [`StatsError::InsufficientData`] when the sample convention is
    /// asked for a variance of fewer than two samples.
    pub fn from_values(values: &[f64], convention: VarianceConvention) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySeries);
        }

        let count = values.len();
        let divisor = match convention {
            VarianceConvention::Sample => {
                if count < 2 {
                    return Err(StatsError::InsufficientData { needed: 2, got: count });
                }
                (count - 1) as f64
            }
            VarianceConvention::Population => count as f64,
        };

        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / divisor;
        let (min, max) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &x| (lo.min(x), hi.max(x)),
        );

        Ok(Self { count, mean, variance, stddev: variance.sqrt(), min, max, convention })
    }

    /// Summarize a metric series.
    pub fn from_series(series: &MetricSeries, convention: VarianceConvention) -> Result<Self, StatsError> {
        Self::from_values(series.values(), convention)
    }
}

/// Where an enacted plan's metric value falls within an ensemble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineRank {
    /// The enacted plan's metric value.
    pub baseline: f64,
    /// Fraction of ensemble samples strictly below the baseline.
    pub below: f64,
    /// Fraction of ensemble samples at or below the baseline.
    pub at_or_below: f64,
}

impl BaselineRank {
    /// Rank `baseline` within `values`. Both fractions land in `[0, 1]`;
    /// reporting the strict and inclusive counts separately keeps ties
    /// against the baseline visible.
    pub fn from_values(values: &[f64], baseline: f64) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySeries);
        }
        let n = values.len() as f64;
        let below = values.iter().filter(|&&x| x < baseline).count() as f64 / n;
        let at_or_below = values.iter().filter(|&&x| x <= baseline).count() as f64 / n;
        Ok(Self { baseline, below, at_or_below })
    }

    /// Rank `baseline` within a metric series.
    pub fn from_series(series: &MetricSeries, baseline: f64) -> Result<Self, StatsError> {
        Self::from_values(series.values(), baseline)
    }
}
