use crate::metrics::PlanMetrics;

/// Chain metric columns that can drive summaries and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MetricColumn {
    EfficiencyGap,
    MeanMedian,
    PartisanBias,
    Declination,
    GopSeats,
    /// Districts with a Dem share in [0.45, 0.55].
    Competitive,
}

impl MetricColumn {
    pub const ALL: [MetricColumn; 6] = [
        MetricColumn::EfficiencyGap,
        MetricColumn::MeanMedian,
        MetricColumn::PartisanBias,
        MetricColumn::Declination,
        MetricColumn::GopSeats,
        MetricColumn::Competitive,
    ];

    /// Column name used in report tables.
    pub fn name(&self) -> &'static str {
        match self {
            MetricColumn::EfficiencyGap => "efficiency_gap",
            MetricColumn::MeanMedian => "mean_median",
            MetricColumn::PartisanBias => "partisan_bias",
            MetricColumn::Declination => "declination_deg",
            MetricColumn::GopSeats => "gop_seats",
            MetricColumn::Competitive => "competitive_45_55",
        }
    }

    /// Extract this column's value from a plan's metric row.
    pub fn extract(&self, metrics: &PlanMetrics) -> f64 {
        match self {
            MetricColumn::EfficiencyGap => metrics.efficiency_gap,
            MetricColumn::MeanMedian => metrics.mean_median,
            MetricColumn::PartisanBias => metrics.partisan_bias,
            MetricColumn::Declination => metrics.declination_deg,
            MetricColumn::GopSeats => metrics.seats.gop as f64,
            MetricColumn::Competitive => metrics.competitive_45_55 as f64,
        }
    }
}
