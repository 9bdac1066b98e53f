mod series;
mod thinning;

pub use series::MetricSeries;
