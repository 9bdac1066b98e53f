mod column;
mod electoral;
mod plan_metrics;
mod tally;

pub use column::MetricColumn;
pub use electoral::SeatCounts;
pub use plan_metrics::PlanMetrics;
pub use tally::{DistrictTallies, DistrictVotes};
