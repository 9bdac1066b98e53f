//! Partisan metrics over per-district tallies.
//!
//! Sign conventions: efficiency gap and mean-median are Dem-positive;
//! declination is GOP-favoring positive. Metrics that are undefined for a
//! plan (no votes, or one party sweeping every district) return NaN rather
//! than failing; callers drop NaN entries before summarizing a chain.

use crate::metrics::{DistrictTallies, DistrictVotes};

/// Seat outcome of a plan under the tallied election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatCounts {
    pub dem: u32,
    pub gop: u32,
    pub ties: u32,
}

impl SeatCounts {
    /// Total districts counted.
    #[inline] pub fn total(&self) -> u32 { self.dem + self.gop + self.ties }

    /// Dem share of seats; NaN for an empty plan.
    pub fn dem_share(&self) -> f64 {
        if self.total() == 0 { f64::NAN } else { self.dem as f64 / self.total() as f64 }
    }

    /// GOP share of seats; NaN for an empty plan.
    pub fn gop_share(&self) -> f64 {
        if self.total() == 0 { f64::NAN } else { self.gop as f64 / self.total() as f64 }
    }
}

impl DistrictTallies {
    /// Count districts won by each party. Exact vote ties stay ties.
    pub fn seat_counts(&self) -> SeatCounts {
        let mut seats = SeatCounts::default();
        for d in self.districts() {
            if d.dem > d.rep {
                seats.dem += 1;
            } else if d.rep > d.dem {
                seats.gop += 1;
            } else {
                seats.ties += 1;
            }
        }
        seats
    }

    /// Efficiency gap from wasted votes, Dem-positive.
    ///
    /// The winner's surplus above the majority threshold `floor(total/2) + 1`
    /// and every loser vote are wasted; a tied district wastes half of each
    /// side. Zero-vote districts are skipped. NaN when the plan has no
    /// two-party votes at all.
    pub fn efficiency_gap(&self) -> f64 {
        let mut wasted_dem = 0.0;
        let mut wasted_rep = 0.0;
        let mut total_votes = 0.0;

        for d in self.districts() {
            let total = d.total();
            if total <= 0.0 { continue }
            total_votes += total;

            let threshold = (total / 2.0).floor() + 1.0;
            let (dem, rep) = if d.dem > d.rep {
                (d.dem - threshold, d.rep)
            } else if d.rep > d.dem {
                (d.dem, d.rep - threshold)
            } else {
                (d.dem / 2.0, d.rep / 2.0)
            };
            wasted_dem += dem.max(0.0);
            wasted_rep += rep.max(0.0);
        }

        if total_votes == 0.0 { return f64::NAN }
        (wasted_dem - wasted_rep) / total_votes
    }

    /// Mean minus median of district Dem shares. NaN when no district has
    /// votes.
    pub fn mean_median(&self) -> f64 {
        let mut shares = self.dem_shares();
        if shares.is_empty() { return f64::NAN }
        shares.sort_by(|a, b| a.total_cmp(b));

        let n = shares.len();
        let mean = shares.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            shares[n / 2]
        } else {
            0.5 * (shares[n / 2 - 1] + shares[n / 2])
        };
        mean - median
    }

    /// Seat share Dem would take with district shares uniformly swung to a
    /// statewide 50-50 vote, minus one half. NaN when the plan has no votes.
    pub fn partisan_bias(&self) -> f64 {
        let shares = self.dem_shares();
        let (total_dem, total_rep) = self
            .districts()
            .iter()
            .filter(|d| d.total() > 0.0)
            .fold((0.0, 0.0), |(dem, rep), d| (dem + d.dem, rep + d.rep));
        if shares.is_empty() || total_dem + total_rep == 0.0 {
            return f64::NAN;
        }

        let shift = 0.5 - total_dem / (total_dem + total_rep);
        let dem_seats_at_even = shares
            .iter()
            .map(|s| (s + shift).clamp(0.0, 1.0))
            .filter(|&s| s > 0.5)
            .count();
        dem_seats_at_even as f64 / shares.len() as f64 - 0.5
    }

    /// Declination in degrees, GOP-favoring positive. NaN when either party
    /// wins no districts (the hinge is undefined).
    pub fn declination_deg(&self) -> f64 {
        let mut shares = self.dem_shares();
        if shares.is_empty() { return f64::NAN }
        shares.sort_by(|a, b| a.total_cmp(b));

        let n = shares.len();
        let k = shares.iter().filter(|&&s| s <= 0.5).count();
        if k == 0 || k == n { return f64::NAN }

        let mean_rep = shares[..k].iter().sum::<f64>() / k as f64;
        let mean_dem = shares[k..].iter().sum::<f64>() / (n - k) as f64;
        let theta_rep = ((0.5 - mean_rep) * n as f64 / k as f64).atan();
        let theta_dem = ((mean_dem - 0.5) * n as f64 / (n - k) as f64).atan();
        (theta_dem - theta_rep).to_degrees()
    }

    /// Number of districts whose Dem share falls inside `[low, high]`.
    pub fn competitive_districts(&self, low: f64, high: f64) -> usize {
        self.districts()
            .iter()
            .filter_map(DistrictVotes::dem_share)
            .filter(|&s| low <= s && s <= high)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::WardGraph;
    use crate::metrics::DistrictTallies;
    use serde_json::json;

    // One ward per district, so district votes equal ward votes.
    fn tallies(votes: &[(f64, f64)]) -> DistrictTallies {
        let nodes: Vec<_> = votes
            .iter()
            .enumerate()
            .map(|(i, (dem, rep))| {
                json!({"id": i, "TOT_POP": 1, "PRES12D": dem, "PRES12R": rep})
            })
            .collect();
        let adjacency: Vec<serde_json::Value> = votes.iter().map(|_| json!([])).collect();
        let graph = WardGraph::from_json_str(
            &json!({"nodes": nodes, "adjacency": adjacency}).to_string(),
        )
        .unwrap();
        let assignment = (0..votes.len()).map(|i| (i as u64, i as u32 + 1));
        DistrictTallies::from_assignment(&graph, assignment)
    }

    #[test]
    fn seat_counts_handle_ties() {
        let seats = tallies(&[(60.0, 40.0), (30.0, 70.0), (50.0, 50.0)]).seat_counts();
        assert_eq!((seats.dem, seats.gop, seats.ties), (1, 1, 1));
        assert_eq!(seats.total(), 3);
        assert!((seats.dem_share() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn efficiency_gap_two_district_example() {
        // D1: Dem 60/40, threshold 51: wasted Dem 9, Rep 40.
        // D2: Dem 30/70, threshold 51: wasted Rep 19, Dem 30.
        // EG = (39 - 59) / 200 = -0.1.
        let t = tallies(&[(60.0, 40.0), (30.0, 70.0)]);
        assert!((t.efficiency_gap() + 0.1).abs() < 1e-12);
    }

    #[test]
    fn efficiency_gap_tied_district_wastes_half_of_each_side() {
        let t = tallies(&[(50.0, 50.0)]);
        // Both sides waste 25; the gap cancels.
        assert_eq!(t.efficiency_gap(), 0.0);
    }

    #[test]
    fn efficiency_gap_skips_zero_vote_districts() {
        let with_empty = tallies(&[(60.0, 40.0), (30.0, 70.0), (0.0, 0.0)]);
        let without = tallies(&[(60.0, 40.0), (30.0, 70.0)]);
        assert_eq!(with_empty.efficiency_gap(), without.efficiency_gap());
    }

    #[test]
    fn efficiency_gap_is_nan_without_votes() {
        assert!(tallies(&[(0.0, 0.0)]).efficiency_gap().is_nan());

        // A plan that assigns nothing tallies no districts at all.
        let graph = WardGraph::from_json_str(
            &json!({
                "nodes": [{"id": 0, "TOT_POP": 1, "PRES12D": 1, "PRES12R": 1}],
                "adjacency": [[]]
            })
            .to_string(),
        )
        .unwrap();
        let empty = DistrictTallies::from_assignment(&graph, std::iter::empty());
        assert!(empty.is_empty());
        assert!(empty.efficiency_gap().is_nan());
        assert!(empty.mean_median().is_nan());
        assert!(empty.partisan_bias().is_nan());
    }

    #[test]
    fn mean_median_difference() {
        // Shares [0.2, 0.4, 0.9]: mean 0.5, median 0.4.
        let t = tallies(&[(20.0, 80.0), (40.0, 60.0), (90.0, 10.0)]);
        assert!((t.mean_median() - 0.1).abs() < 1e-12);

        // Even count: shares [0.3, 0.6], mean == median.
        let even = tallies(&[(60.0, 40.0), (30.0, 70.0)]);
        assert!(even.mean_median().abs() < 1e-12);
    }

    #[test]
    fn partisan_bias_balanced_plan_is_zero() {
        // Statewide Dem share 0.45; swung shares [0.35, 0.65] split seats.
        let t = tallies(&[(60.0, 40.0), (30.0, 70.0)]);
        assert!(t.partisan_bias().abs() < 1e-12);
    }

    #[test]
    fn partisan_bias_asymmetric_plan() {
        // Shares [0.6, 0.55, 0.2], statewide 0.45; swung [0.65, 0.6, 0.25]
        // gives Dem 2 of 3 seats at an even vote.
        let t = tallies(&[(60.0, 40.0), (55.0, 45.0), (20.0, 80.0)]);
        assert!((t.partisan_bias() - (2.0 / 3.0 - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn declination_two_district_example() {
        // Shares [0.3, 0.6]: theta_R = atan(0.4), theta_D = atan(0.2).
        let t = tallies(&[(30.0, 70.0), (60.0, 40.0)]);
        assert!((t.declination_deg() + 10.49146).abs() < 1e-3);
    }

    #[test]
    fn declination_is_nan_when_one_party_sweeps() {
        assert!(tallies(&[(60.0, 40.0), (70.0, 30.0)]).declination_deg().is_nan());
        assert!(tallies(&[(40.0, 60.0)]).declination_deg().is_nan());
    }

    #[test]
    fn competitive_windows() {
        let t = tallies(&[(46.0, 54.0), (52.0, 48.0), (30.0, 70.0)]);
        assert_eq!(t.competitive_districts(0.45, 0.55), 2);
        assert_eq!(t.competitive_districts(0.48, 0.52), 1);
    }
}
