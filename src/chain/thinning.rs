use crate::chain::MetricSeries;
use crate::error::StatsError;

impl MetricSeries {
    /// Keep every `interval`-th sample starting at `offset`.
    ///
    /// The result retains original step indices, so provenance survives
    /// thinning; its length is `ceil((len - offset) / interval)`. Fails with
    /// [`StatsError::InvalidParameter`] when `interval < 1` or
    /// `offset >= interval`. An offset past the end of the series yields an
    /// empty result rather than an error: a chain shorter than its thinning
    /// interval is degenerate but valid.
    pub fn thin(&self, interval: usize, offset: usize) -> Result<MetricSeries, StatsError> {
        if interval < 1 {
            return Err(StatsError::InvalidParameter {
                reason: "thinning interval must be >= 1".into(),
            });
        }
        if offset >= interval {
            return Err(StatsError::InvalidParameter {
                reason: format!("offset {offset} must be < thinning interval {interval}"),
            });
        }

        let (steps, values) = self.iter().skip(offset).step_by(interval).unzip();
        Ok(MetricSeries { steps, values })
    }
}

#[cfg(test)]
mod tests {
    use crate::chain::MetricSeries;
    use crate::error::StatsError;

    #[test]
    fn unit_interval_is_identity() {
        let series = MetricSeries::from_values((0..20).map(f64::from));
        assert_eq!(series.thin(1, 0).unwrap(), series);
    }

    #[test]
    fn keeps_every_second_sample() {
        let series = MetricSeries::from_values((1..=10).map(f64::from));
        let thinned = series.thin(2, 0).unwrap();
        assert_eq!(thinned.values(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(thinned.steps(), &[0, 2, 4, 6, 8]);

        let shifted = series.thin(2, 1).unwrap();
        assert_eq!(shifted.values(), &[2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn length_law_holds() {
        for n in [0usize, 1, 5, 10, 17] {
            let series = MetricSeries::from_values((0..n).map(|i| i as f64));
            for interval in 1..=12usize {
                for offset in 0..interval {
                    let thinned = series.thin(interval, offset).unwrap();
                    let expected = (n.saturating_sub(offset) + interval - 1) / interval;
                    assert_eq!(thinned.len(), expected, "n={n} k={interval} offset={offset}");
                }
            }
        }
    }

    #[test]
    fn interval_longer_than_chain_is_degenerate_not_an_error() {
        let series = MetricSeries::from_values([1.0, 2.0, 3.0]);
        let single = series.thin(10, 0).unwrap();
        assert_eq!(single.values(), &[1.0]);

        // Offset past the end leaves nothing, which is still valid.
        let empty = series.thin(10, 5).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let series = MetricSeries::from_values([1.0, 2.0, 3.0]);
        assert!(matches!(series.thin(0, 0), Err(StatsError::InvalidParameter { .. })));
        assert!(matches!(series.thin(3, 3), Err(StatsError::InvalidParameter { .. })));
        assert!(matches!(series.thin(2, 5), Err(StatsError::InvalidParameter { .. })));
    }
}
