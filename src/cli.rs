use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::metrics::MetricColumn;
use crate::stats::VarianceConvention;

/// Ensemble analysis CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "ensemblemander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every plan in an ensemble and summarize the chain
    Analyze(AnalyzeArgs),

    /// Sweep thinning intervals for a stability diagnostic
    Diagnose(DiagnoseArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Ward graph JSON (sampler adjacency format)
    #[arg(value_hint = ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Ensemble plan stream (NDJSON or pretty-printed JSON objects)
    #[arg(value_hint = ValueHint::FilePath)]
    pub ensemble: PathBuf,

    /// Output directory for CSV reports
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// Metric column the baseline is ranked against
    #[arg(long, value_enum, default_value = "efficiency-gap")]
    pub metric: MetricColumn,

    /// Enacted plan's value of the selected metric; enables rank columns
    #[arg(long)]
    pub baseline: Option<f64>,

    /// Thinning interval applied before summarizing (1 = no thinning)
    #[arg(long, default_value_t = 1)]
    pub thin: usize,

    /// Offset into the chain before thinning (must be < --thin)
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Variance convention for summaries
    #[arg(long, value_enum, default_value = "sample")]
    pub variance: VarianceConvention,
}

#[derive(Args, Debug, Clone)]
pub struct DiagnoseArgs {
    /// Ward graph JSON (sampler adjacency format)
    #[arg(value_hint = ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Ensemble plan stream (NDJSON or pretty-printed JSON objects)
    #[arg(value_hint = ValueHint::FilePath)]
    pub ensemble: PathBuf,

    /// Output directory for CSV reports
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// Metric column to sweep
    #[arg(long, value_enum, default_value = "efficiency-gap")]
    pub metric: MetricColumn,

    /// Candidate thinning intervals
    #[arg(long, value_delimiter = ',', default_values_t = [1usize, 2, 5, 10])]
    pub intervals: Vec<usize>,

    /// Variance convention for summaries
    #[arg(long, value_enum, default_value = "sample")]
    pub variance: VarianceConvention,
}
