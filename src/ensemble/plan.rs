use ahash::AHashMap;
use serde::Deserialize;

/// Sampler-run header echoed into each plan record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChainMeta {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub epsilon: Option<f64>,
    #[serde(default)]
    pub steps_between: Option<u64>,
    #[serde(default)]
    pub burn_in: Option<u64>,
    #[serde(default)]
    pub thin: Option<u64>,
}

/// One accepted plan from the sampler's NDJSON stream.
///
/// Field names follow the streaming saver; aliases accept the spelling the
/// batch generator writes instead (`plan_index`, `rep_seats_won`).
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRecord {
    #[serde(default, alias = "plan_index")]
    pub index: Option<u64>,
    #[serde(default)]
    pub meta: Option<ChainMeta>,
    #[serde(default)]
    pub contiguous: Option<bool>,
    #[serde(default)]
    pub num_districts: Option<u32>,
    #[serde(default, alias = "rep_seats_won")]
    pub gop_seats: Option<u32>,
    #[serde(default)]
    pub efficiency_gap: Option<f64>,
    /// Ward id -> district id. JSON object keys are strings; they are parsed
    /// to integer ward ids on the way in.
    #[serde(deserialize_with = "de_assignment")]
    pub assignment: AHashMap<u64, u32>,
}

fn de_assignment<'de, D>(deserializer: D) -> Result<AHashMap<u64, u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = std::collections::HashMap::<String, u32>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(ward, district)| {
            ward.parse::<u64>()
                .map(|id| (id, district))
                .map_err(|_| serde::de::Error::custom(format!("non-integer ward id {ward:?} in assignment")))
        })
        .collect()
}
