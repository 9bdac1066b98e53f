use ahash::AHashMap;

use crate::ensemble::PlanRecord;
use crate::graph::WardGraph;

/// Two-party vote totals for one district.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistrictVotes {
    pub district: u32,
    pub dem: f64,
    pub rep: f64,
}

impl DistrictVotes {
    /// Combined two-party total.
    #[inline] pub fn total(&self) -> f64 { self.dem + self.rep }

    /// Dem share of the two-party vote; `None` for a zero-vote district.
    #[inline]
    pub fn dem_share(&self) -> Option<f64> {
        (self.total() > 0.0).then(|| self.dem / self.total())
    }
}

/// Per-district tallies for a single plan, ordered by district id.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictTallies {
    districts: Vec<DistrictVotes>,
    skipped_wards: usize,
}

impl DistrictTallies {
    /// Aggregate ward votes by district for one plan.
    pub fn from_plan(graph: &WardGraph, plan: &PlanRecord) -> Self {
        Self::from_assignment(graph, plan.assignment.iter().map(|(&ward, &district)| (ward, district)))
    }

    /// Aggregate ward votes by district. Wards in the assignment with no
    /// counterpart in the graph are counted as skipped, not errors.
    pub fn from_assignment(
        graph: &WardGraph,
        assignment: impl IntoIterator<Item = (u64, u32)>,
    ) -> Self {
        let mut by_district: AHashMap<u32, (f64, f64)> = AHashMap::new();
        let mut skipped_wards = 0;
        for (ward, district) in assignment {
            match graph.ward(ward) {
                Some(data) => {
                    let entry = by_district.entry(district).or_default();
                    entry.0 += data.dem;
                    entry.1 += data.rep;
                }
                None => skipped_wards += 1,
            }
        }

        let mut districts: Vec<DistrictVotes> = by_district
            .into_iter()
            .map(|(district, (dem, rep))| DistrictVotes { district, dem, rep })
            .collect();
        districts.sort_by_key(|d| d.district);

        Self { districts, skipped_wards }
    }

    /// Number of districts in the plan.
    #[inline] pub fn len(&self) -> usize { self.districts.len() }

    /// Returns true if the plan tallied no districts.
    #[inline] pub fn is_empty(&self) -> bool { self.districts.is_empty() }

    /// Districts in ascending id order.
    #[inline] pub fn districts(&self) -> &[DistrictVotes] { &self.districts }

    /// Wards in the assignment with no counterpart in the graph.
    #[inline] pub fn skipped_wards(&self) -> usize { self.skipped_wards }

    /// District Dem shares, zero-vote districts skipped.
    pub(crate) fn dem_shares(&self) -> Vec<f64> {
        self.districts.iter().filter_map(DistrictVotes::dem_share).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::DistrictTallies;
    use crate::graph::WardGraph;
    use serde_json::json;

    fn graph() -> WardGraph {
        let json = json!({
            "nodes": [
                {"id": 0, "TOT_POP": 10, "PRES12D": 60, "PRES12R": 40},
                {"id": 1, "TOT_POP": 10, "PRES12D": 30, "PRES12R": 70},
                {"id": 2, "TOT_POP": 10, "PRES12D": 10, "PRES12R": 20}
            ],
            "adjacency": [[], [], []]
        })
        .to_string();
        WardGraph::from_json_str(&json).unwrap()
    }

    #[test]
    fn aggregates_by_district_in_id_order() {
        let tallies =
            DistrictTallies::from_assignment(&graph(), [(2, 2), (0, 1), (1, 2)]);
        assert_eq!(tallies.len(), 2);
        let districts = tallies.districts();
        assert_eq!(districts[0].district, 1);
        assert_eq!((districts[0].dem, districts[0].rep), (60.0, 40.0));
        assert_eq!((districts[1].dem, districts[1].rep), (40.0, 90.0));
        assert_eq!(tallies.skipped_wards(), 0);
    }

    #[test]
    fn unknown_wards_are_skipped() {
        let tallies = DistrictTallies::from_assignment(&graph(), [(0, 1), (99, 1)]);
        assert_eq!(tallies.skipped_wards(), 1);
        assert_eq!(tallies.districts()[0].dem, 60.0);
    }

    #[test]
    fn zero_vote_district_has_no_share() {
        let json = json!({
            "nodes": [{"id": 0, "TOT_POP": 5, "PRES12D": 0, "PRES12R": 0}],
            "adjacency": [[]]
        })
        .to_string();
        let graph = WardGraph::from_json_str(&json).unwrap();
        let tallies = DistrictTallies::from_assignment(&graph, [(0, 1)]);
        assert_eq!(tallies.districts()[0].dem_share(), None);
        assert!(tallies.dem_shares().is_empty());
    }
}
