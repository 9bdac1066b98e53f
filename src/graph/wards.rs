use std::{fs::File, io::BufReader, path::Path};

use ahash::AHashMap;
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;

/// Population column candidates, in pipeline preference order.
const POPULATION_COLUMNS: [&str; 3] = ["TOT_POP", "PERSONS", "PERSONS18"];

/// Dem/Rep vote column pairs, in pipeline preference order.
const VOTE_COLUMN_PAIRS: [(&str, &str); 5] = [
    ("PRES12D", "PRES12R"),
    ("PREDEM24", "PREREP24"),
    ("USHDEM24", "USHREP24"),
    ("WSADEM24", "WSAREP24"),
    ("WSSDEM24", "WSSREP24"),
];

/// Attribute columns selected for an analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardColumns {
    pub population: String,
    pub dem: String,
    pub rep: String,
}

/// Per-ward totals after column detection and numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WardData {
    pub population: f64,
    pub dem: f64,
    pub rep: f64,
}

/// The ward adjacency graph the sampling pipeline emits, reduced to the
/// attributes the analysis needs.
#[derive(Debug, Clone)]
pub struct WardGraph {
    columns: WardColumns,
    wards: AHashMap<u64, WardData>,
    edge_count: usize,
}

/// The sampler's graph JSON: node attribute maps plus adjacency lists.
#[derive(Deserialize)]
struct RawGraph {
    nodes: Vec<serde_json::Map<String, Value>>,
    #[serde(default)]
    adjacency: Vec<Vec<Value>>,
}

impl WardGraph {
    /// Load a graph from the sampler's JSON adjacency format.
    pub fn read_from_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open graph file: {}", path.display()))?;
        let raw: RawGraph = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse graph JSON: {}", path.display()))?;
        Self::from_raw(raw)
    }

    /// Load a graph from JSON text (for embedding and tests).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawGraph = serde_json::from_str(json).context("Failed to parse graph JSON")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawGraph) -> Result<Self> {
        let Some(first) = raw.nodes.first() else { bail!("Graph has no nodes") };
        let columns = detect_columns(first)?;

        let mut wards = AHashMap::with_capacity(raw.nodes.len());
        for (ordinal, node) in raw.nodes.iter().enumerate() {
            let id = node
                .get("id")
                .and_then(node_id)
                .with_context(|| format!("Node {ordinal} has no usable integer id"))?;
            wards.insert(id, WardData {
                population: coerce_numeric(node.get(&columns.population)),
                dem: coerce_numeric(node.get(&columns.dem)),
                rep: coerce_numeric(node.get(&columns.rep)),
            });
        }

        // Both directions of each undirected edge appear in the adjacency lists.
        let edge_count = raw.adjacency.iter().map(Vec::len).sum::<usize>() / 2;

        Ok(Self { columns, wards, edge_count })
    }

    /// Columns selected by detection.
    #[inline] pub fn columns(&self) -> &WardColumns { &self.columns }

    /// Number of wards.
    #[inline] pub fn ward_count(&self) -> usize { self.wards.len() }

    /// Number of undirected adjacency edges.
    #[inline] pub fn edge_count(&self) -> usize { self.edge_count }

    /// Attribute totals for a ward, if present.
    #[inline] pub fn ward(&self, id: u64) -> Option<&WardData> { self.wards.get(&id) }

    /// Total population across all wards.
    pub fn total_population(&self) -> f64 {
        self.wards.values().map(|w| w.population).sum()
    }

    /// Statewide Dem share of the two-party vote; NaN when the graph carries
    /// no votes at all.
    pub fn statewide_dem_share(&self) -> f64 {
        let (dem, rep) = self
            .wards
            .values()
            .fold((0.0, 0.0), |(d, r), w| (d + w.dem, r + w.rep));
        let total = dem + rep;
        if total > 0.0 { dem / total } else { f64::NAN }
    }
}

/// Pick population and vote columns from the first node's attributes, the
/// same way the sampling pipeline does.
fn detect_columns(attrs: &serde_json::Map<String, Value>) -> Result<WardColumns> {
    let population = POPULATION_COLUMNS
        .iter()
        .find(|c| attrs.contains_key(**c))
        .ok_or_else(|| {
            anyhow!("No population column found (tried {})", POPULATION_COLUMNS.join(", "))
        })?;

    let (dem, rep) = VOTE_COLUMN_PAIRS
        .iter()
        .find(|(d, r)| attrs.contains_key(*d) && attrs.contains_key(*r))
        .ok_or_else(|| anyhow!("No Dem/Rep vote column pair found in node attributes"))?;

    Ok(WardColumns {
        population: population.to_string(),
        dem: dem.to_string(),
        rep: rep.to_string(),
    })
}

/// Node ids arrive as JSON integers or numeric strings.
fn node_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Treat null, NaN, and unparseable attribute values as zero, matching the
/// pipeline's preprocessing.
fn coerce_numeric(value: Option<&Value>) -> f64 {
    let coerced = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if coerced.is_finite() { coerced } else { 0.0 }
}
