use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};

use crate::ensemble::PlanRecord;

/// Read every plan record from an ensemble file.
pub fn read_plans(path: &Path) -> Result<Vec<PlanRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open ensemble file: {}", path.display()))?;
    parse_plans(BufReader::new(file))
        .with_context(|| format!("Failed to read ensemble: {}", path.display()))
}

/// Parse plan records from a reader.
///
/// The stream is parsed as concatenated JSON values, so both strict
/// one-object-per-line NDJSON and the pretty-printed, blank-line-separated
/// stream the saver actually writes are accepted.
pub fn parse_plans(reader: impl std::io::Read) -> Result<Vec<PlanRecord>> {
    let mut plans = Vec::new();
    let stream = serde_json::Deserializer::from_reader(reader).into_iter::<PlanRecord>();
    for (ordinal, record) in stream.enumerate() {
        let record =
            record.with_context(|| format!("Failed to parse plan record {}", ordinal + 1))?;
        plans.push(record);
    }
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::parse_plans;

    #[test]
    fn reads_strict_ndjson() {
        let input = concat!(
            "{\"index\": 1, \"gop_seats\": 5, \"efficiency_gap\": -0.02, \"assignment\": {\"0\": 1, \"1\": 2}}\n",
            "{\"index\": 2, \"assignment\": {\"0\": 2, \"1\": 1}}\n",
        );
        let plans = parse_plans(input.as_bytes()).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].index, Some(1));
        assert_eq!(plans[0].gop_seats, Some(5));
        assert_eq!(plans[0].assignment.get(&0), Some(&1));
        assert_eq!(plans[1].assignment.get(&0), Some(&2));
    }

    #[test]
    fn reads_pretty_printed_stream_with_blank_lines() {
        let input = r#"{
  "meta": {
    "seed": 24,
    "epsilon": 0.02,
    "thin": 1
  },
  "index": 1,
  "contiguous": true,
  "gop_seats": 6,
  "efficiency_gap": -0.031,
  "assignment": {
    "0": 1,
    "1": 1
  }
}

{
  "index": 2,
  "assignment": {
    "0": 2,
    "1": 2
  }
}
"#;
        let plans = parse_plans(input.as_bytes()).unwrap();
        assert_eq!(plans.len(), 2);
        let meta = plans[0].meta.as_ref().unwrap();
        assert_eq!(meta.seed, Some(24));
        assert_eq!(meta.thin, Some(1));
        assert_eq!(plans[0].contiguous, Some(true));
        assert_eq!(plans[1].index, Some(2));
    }

    #[test]
    fn accepts_batch_generator_field_names() {
        let input = r#"{"plan_index": 3, "num_districts": 8, "rep_seats_won": 5, "assignment": {"10": 4}}"#;
        let plans = parse_plans(input.as_bytes()).unwrap();
        assert_eq!(plans[0].index, Some(3));
        assert_eq!(plans[0].num_districts, Some(8));
        assert_eq!(plans[0].gop_seats, Some(5));
        assert_eq!(plans[0].assignment.get(&10), Some(&4));
    }

    #[test]
    fn non_integer_ward_id_is_an_error() {
        let input = r#"{"index": 1, "assignment": {"ward-a": 1}}"#;
        let err = parse_plans(input.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("non-integer ward id"));
    }
}
