//! CSV report tables for external plotting.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::metrics::PlanMetrics;
use crate::stats::{BaselineRank, SummaryStatistics, SweepEntry};

/// Write a DataFrame to a CSV file.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[report] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[report] Failed to write CSV to {:?}", path))
}

/// One row per plan, one column per metric.
pub fn plan_metrics_frame(metrics: &[PlanMetrics], statewide_dem_share: f64) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Series::new("plan_index".into(), metrics.iter().map(|m| m.index).collect::<Vec<_>>()).into(),
        Series::new("num_districts".into(), metrics.iter().map(|m| m.num_districts).collect::<Vec<_>>()).into(),
        Series::new("dem_seats".into(), metrics.iter().map(|m| m.seats.dem).collect::<Vec<_>>()).into(),
        Series::new("gop_seats".into(), metrics.iter().map(|m| m.seats.gop).collect::<Vec<_>>()).into(),
        Series::new("ties".into(), metrics.iter().map(|m| m.seats.ties).collect::<Vec<_>>()).into(),
        Series::new("gop_seats_reported".into(), metrics.iter().map(|m| m.gop_seats_reported).collect::<Vec<_>>()).into(),
        Series::new("seat_share_dem".into(), metrics.iter().map(|m| m.seats.dem_share()).collect::<Vec<_>>()).into(),
        Series::new("seat_share_gop".into(), metrics.iter().map(|m| m.seats.gop_share()).collect::<Vec<_>>()).into(),
        Series::new("efficiency_gap".into(), metrics.iter().map(|m| m.efficiency_gap).collect::<Vec<_>>()).into(),
        Series::new("efficiency_gap_reported".into(), metrics.iter().map(|m| m.efficiency_gap_reported).collect::<Vec<_>>()).into(),
        Series::new("mean_median".into(), metrics.iter().map(|m| m.mean_median).collect::<Vec<_>>()).into(),
        Series::new("partisan_bias".into(), metrics.iter().map(|m| m.partisan_bias).collect::<Vec<_>>()).into(),
        Series::new("declination_deg".into(), metrics.iter().map(|m| m.declination_deg).collect::<Vec<_>>()).into(),
        Series::new("competitive_45_55".into(), metrics.iter().map(|m| m.competitive_45_55).collect::<Vec<_>>()).into(),
        Series::new("competitive_48_52".into(), metrics.iter().map(|m| m.competitive_48_52).collect::<Vec<_>>()).into(),
        Series::new("skipped_wards".into(), metrics.iter().map(|m| m.skipped_wards).collect::<Vec<_>>()).into(),
        Series::new("statewide_dem_share".into(), vec![statewide_dem_share; metrics.len()]).into(),
    ])?;
    Ok(df)
}

/// One summary row per metric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub metric: &'static str,
    pub stats: SummaryStatistics,
    /// Present only for the column the baseline was ranked against.
    pub rank: Option<BaselineRank>,
}

/// Per-metric summary table; rank columns stay null without a baseline.
pub fn summary_frame(rows: &[SummaryRow]) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Series::new("metric".into(), rows.iter().map(|r| r.metric).collect::<Vec<_>>()).into(),
        Series::new("count".into(), rows.iter().map(|r| r.stats.count as u64).collect::<Vec<_>>()).into(),
        Series::new("mean".into(), rows.iter().map(|r| r.stats.mean).collect::<Vec<_>>()).into(),
        Series::new("variance".into(), rows.iter().map(|r| r.stats.variance).collect::<Vec<_>>()).into(),
        Series::new("stddev".into(), rows.iter().map(|r| r.stats.stddev).collect::<Vec<_>>()).into(),
        Series::new("min".into(), rows.iter().map(|r| r.stats.min).collect::<Vec<_>>()).into(),
        Series::new("max".into(), rows.iter().map(|r| r.stats.max).collect::<Vec<_>>()).into(),
        Series::new("baseline".into(), rows.iter().map(|r| r.rank.map(|k| k.baseline)).collect::<Vec<_>>()).into(),
        Series::new("rank_below".into(), rows.iter().map(|r| r.rank.map(|k| k.below)).collect::<Vec<_>>()).into(),
        Series::new("rank_at_or_below".into(), rows.iter().map(|r| r.rank.map(|k| k.at_or_below)).collect::<Vec<_>>()).into(),
    ])?;
    Ok(df)
}

/// Thinning-sweep table: one row per interval, statistics columns null and
/// the error column filled for intervals that failed.
pub fn sweep_frame(entries: &[SweepEntry]) -> Result<DataFrame> {
    let stat = |f: fn(&SummaryStatistics) -> f64| {
        entries.iter().map(|e| e.stats.as_ref().ok().map(f)).collect::<Vec<_>>()
    };

    let df = DataFrame::new(vec![
        Series::new("interval".into(), entries.iter().map(|e| e.interval as u64).collect::<Vec<_>>()).into(),
        Series::new("count".into(), entries.iter().map(|e| e.stats.as_ref().ok().map(|s| s.count as u64)).collect::<Vec<_>>()).into(),
        Series::new("mean".into(), stat(|s| s.mean)).into(),
        Series::new("variance".into(), stat(|s| s.variance)).into(),
        Series::new("stddev".into(), stat(|s| s.stddev)).into(),
        Series::new("min".into(), stat(|s| s.min)).into(),
        Series::new("max".into(), stat(|s| s.max)).into(),
        Series::new("error".into(), entries.iter().map(|e| e.stats.as_ref().err().map(ToString::to_string)).collect::<Vec<_>>()).into(),
    ])?;
    Ok(df)
}
