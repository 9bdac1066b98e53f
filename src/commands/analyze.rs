use anyhow::{Result, bail};

use crate::chain::MetricSeries;
use crate::cli::{AnalyzeArgs, Cli};
use crate::common::ensure_dir_exists;
use crate::ensemble::read_plans;
use crate::graph::WardGraph;
use crate::metrics::{MetricColumn, PlanMetrics};
use crate::report::{self, SummaryRow};
use crate::stats::{BaselineRank, SummaryStatistics};

pub fn run(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let graph = WardGraph::read_from_json(&args.graph)?;
    if cli.verbose > 0 {
        eprintln!(
            "[analyze] graph: {} wards, {} edges, total population {}",
            graph.ward_count(),
            graph.edge_count(),
            graph.total_population(),
        );
        let columns = graph.columns();
        eprintln!(
            "[analyze] columns: population={} dem={} rep={}",
            columns.population, columns.dem, columns.rep,
        );
    }

    let plans = read_plans(&args.ensemble)?;
    if plans.is_empty() {
        bail!("Ensemble {} contains no plans", args.ensemble.display());
    }
    if cli.verbose > 0 {
        eprintln!("[analyze] loaded {} plans", plans.len());
        if let Some(meta) = plans.iter().find_map(|p| p.meta.as_ref()) {
            eprintln!(
                "[analyze] sampler meta: seed={:?} epsilon={:?} burn_in={:?} thin={:?}",
                meta.seed, meta.epsilon, meta.burn_in, meta.thin,
            );
        }
    }

    let broken = plans.iter().filter(|p| p.contiguous == Some(false)).count();
    if broken > 0 {
        eprintln!("[analyze] warning: {broken} plan(s) flagged non-contiguous by the sampler");
    }

    let metrics: Vec<PlanMetrics> =
        plans.iter().map(|plan| PlanMetrics::compute(&graph, plan)).collect();

    ensure_dir_exists(&args.out_dir)?;
    let plan_csv = args.out_dir.join("plan_metrics.csv");
    report::write_csv(
        &mut report::plan_metrics_frame(&metrics, graph.statewide_dem_share())?,
        &plan_csv,
    )?;
    if cli.verbose > 0 {
        eprintln!("[analyze] wrote {}", plan_csv.display());
    }

    // Every metric column is summarized over the same thinned chain; the
    // baseline is ranked against the selected column only.
    let mut rows = Vec::with_capacity(MetricColumn::ALL.len());
    for column in MetricColumn::ALL {
        let thinned = metric_series(&metrics, column).thin(args.thin, args.offset)?;
        let stats = SummaryStatistics::from_series(&thinned, args.variance)?;
        let rank = if column == args.metric {
            args.baseline.map(|b| BaselineRank::from_series(&thinned, b)).transpose()?
        } else {
            None
        };
        rows.push(SummaryRow { metric: column.name(), stats, rank });
    }

    let summary_csv = args.out_dir.join("summary.csv");
    report::write_csv(&mut report::summary_frame(&rows)?, &summary_csv)?;
    if cli.verbose > 0 {
        eprintln!("[analyze] wrote {}", summary_csv.display());
    }

    Ok(())
}

/// Collect one metric column across plans into a chain series. NaN entries
/// (the metric is undefined for that plan) are dropped before re-indexing.
pub(crate) fn metric_series(metrics: &[PlanMetrics], column: MetricColumn) -> MetricSeries {
    MetricSeries::from_values(
        metrics.iter().map(|m| column.extract(m)).filter(|v| v.is_finite()),
    )
}

#[cfg(test)]
mod tests {
    use super::metric_series;
    use crate::metrics::{MetricColumn, PlanMetrics, SeatCounts};

    fn row(efficiency_gap: f64) -> PlanMetrics {
        PlanMetrics {
            index: None,
            num_districts: 2,
            seats: SeatCounts { dem: 1, gop: 1, ties: 0 },
            efficiency_gap,
            efficiency_gap_reported: None,
            gop_seats_reported: None,
            mean_median: 0.0,
            partisan_bias: 0.0,
            declination_deg: f64::NAN,
            competitive_45_55: 0,
            competitive_48_52: 0,
            skipped_wards: 0,
        }
    }

    #[test]
    fn nan_plans_are_dropped_and_reindexed() {
        let rows = [row(0.1), row(f64::NAN), row(0.3)];
        let series = metric_series(&rows, MetricColumn::EfficiencyGap);
        assert_eq!(series.values(), &[0.1, 0.3]);
        assert_eq!(series.steps(), &[0, 1]);

        let declination = metric_series(&rows, MetricColumn::Declination);
        assert!(declination.is_empty());
    }
}
