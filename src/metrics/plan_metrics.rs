use crate::ensemble::PlanRecord;
use crate::graph::WardGraph;
use crate::metrics::{DistrictTallies, SeatCounts};

/// The full metric row for one sampled plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanMetrics {
    pub index: Option<u64>,
    pub num_districts: u32,
    pub seats: SeatCounts,
    /// Efficiency gap recomputed from the graph's tallied election.
    pub efficiency_gap: f64,
    /// Efficiency gap as the sampler reported it, when present.
    pub efficiency_gap_reported: Option<f64>,
    /// GOP seats as the sampler reported them, when present.
    pub gop_seats_reported: Option<u32>,
    pub mean_median: f64,
    pub partisan_bias: f64,
    pub declination_deg: f64,
    pub competitive_45_55: u32,
    pub competitive_48_52: u32,
    pub skipped_wards: u32,
}

impl PlanMetrics {
    /// Score one plan against the ward graph's tallied election.
    pub fn compute(graph: &WardGraph, plan: &PlanRecord) -> Self {
        let tallies = DistrictTallies::from_plan(graph, plan);
        Self {
            index: plan.index,
            num_districts: tallies.len() as u32,
            seats: tallies.seat_counts(),
            efficiency_gap: tallies.efficiency_gap(),
            efficiency_gap_reported: plan.efficiency_gap,
            gop_seats_reported: plan.gop_seats,
            mean_median: tallies.mean_median(),
            partisan_bias: tallies.partisan_bias(),
            declination_deg: tallies.declination_deg(),
            competitive_45_55: tallies.competitive_districts(0.45, 0.55) as u32,
            competitive_48_52: tallies.competitive_districts(0.48, 0.52) as u32,
            skipped_wards: tallies.skipped_wards() as u32,
        }
    }
}
