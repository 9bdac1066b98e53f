mod ndjson;
mod plan;

pub use ndjson::{parse_plans, read_plans};
pub use plan::{ChainMeta, PlanRecord};
