/// An ordered sequence of (step, value) samples for a single chain metric.
///
/// Step indices are strictly increasing. Series built with
/// [`MetricSeries::from_values`] are densely indexed from 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricSeries {
    pub(super) steps: Vec<u64>,
    pub(super) values: Vec<f64>,
}

impl MetricSeries {
    /// Construct a series from parallel step and value vectors.
    pub fn new(steps: Vec<u64>, values: Vec<f64>) -> Self {
        assert!(steps.len() == values.len(), "steps.len() must equal values.len()");
        assert!(steps.windows(2).all(|w| w[0] < w[1]), "step indices must be strictly increasing");
        Self { steps, values }
    }

    /// Construct a densely indexed series (steps 0..n) from values alone.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        let steps = (0..values.len() as u64).collect();
        Self { steps, values }
    }

    /// Number of samples.
    #[inline] pub fn len(&self) -> usize { self.values.len() }

    /// Returns true if the series holds no samples.
    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Step indices, in order.
    #[inline] pub fn steps(&self) -> &[u64] { &self.steps }

    /// Sample values, in step order.
    #[inline] pub fn values(&self) -> &[f64] { &self.values }

    /// Iterate over (step, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.steps.iter().copied().zip(self.values.iter().copied())
    }
}
