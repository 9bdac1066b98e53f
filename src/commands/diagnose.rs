use anyhow::{Result, bail};

use crate::cli::{Cli, DiagnoseArgs};
use crate::common::ensure_dir_exists;
use crate::ensemble::read_plans;
use crate::graph::WardGraph;
use crate::metrics::PlanMetrics;
use crate::report;
use crate::stats::thinning_sweep;

use super::analyze::metric_series;

pub fn run(cli: &Cli, args: &DiagnoseArgs) -> Result<()> {
    let graph = WardGraph::read_from_json(&args.graph)?;
    let plans = read_plans(&args.ensemble)?;
    if plans.is_empty() {
        bail!("Ensemble {} contains no plans", args.ensemble.display());
    }
    if cli.verbose > 0 {
        eprintln!(
            "[diagnose] {} plans, metric {}, intervals {:?}",
            plans.len(),
            args.metric.name(),
            args.intervals,
        );
    }

    let metrics: Vec<PlanMetrics> =
        plans.iter().map(|plan| PlanMetrics::compute(&graph, plan)).collect();
    let series = metric_series(&metrics, args.metric);

    let entries = thinning_sweep(&series, &args.intervals, args.variance);
    if cli.verbose > 0 {
        for entry in &entries {
            match &entry.stats {
                Ok(stats) => eprintln!(
                    "[diagnose] k={:<4} n={:<6} mean={:.6} stddev={:.6}",
                    entry.interval, stats.count, stats.mean, stats.stddev,
                ),
                Err(err) => eprintln!("[diagnose] k={:<4} {err}", entry.interval),
            }
        }
    }

    ensure_dir_exists(&args.out_dir)?;
    let sweep_csv = args.out_dir.join("thinning_sweep.csv");
    report::write_csv(&mut report::sweep_frame(&entries)?, &sweep_csv)?;
    if cli.verbose > 0 {
        eprintln!("[diagnose] wrote {}", sweep_csv.display());
    }

    Ok(())
}
