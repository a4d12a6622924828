//! Tolerant result-payload model and normalization
//!
//! Result files are JSON documents whose top-level shape has varied
//! over time: either a single run object, or a `{"results": [...]}`
//! wrapper around a list of run objects. Field values are not trusted
//! either; every field deserializes leniently, degrading to `None` or
//! an empty list instead of failing the payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One logical benchmark run for a single dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetPayload {
    /// Dataset identifier embedded in the payload, when present and a
    /// non-empty string.
    #[serde(default, rename = "dataset", deserialize_with = "lenient_dataset_id")]
    pub dataset_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_scenarios")]
    pub scenarios: Vec<ScenarioEntry>,
}

/// One interaction scenario within a run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioEntry {
    /// Scenario name; `None` (or empty, or non-string) drops the
    /// whole entry from aggregation.
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_passes")]
    pub passes: Vec<PassEntry>,
}

/// One measured pass of a scenario.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PassEntry {
    /// Render duration; non-numeric values are excluded from the
    /// sample, not fatal.
    #[serde(default, rename = "durationMs", deserialize_with = "lenient_duration")]
    pub duration_ms: Option<f64>,
    /// Point count actually rendered; only non-negative integers are
    /// accepted, and the value only feeds the dataset size estimate.
    #[serde(default, rename = "renderedPoints", deserialize_with = "lenient_points")]
    pub rendered_points: Option<u64>,
}

/// Normalize one parsed JSON root into its dataset payloads.
///
/// A non-mapping root yields nothing (placeholder and auxiliary files
/// are tolerated, not errors). A root carrying a `results` array
/// yields each mapping element of that array. Any other mapping is
/// itself a single payload. The iterator is finite and consumed once.
pub fn dataset_payloads(root: Value) -> impl Iterator<Item = DatasetPayload> {
    let payloads: Vec<DatasetPayload> = match root {
        Value::Object(map) => {
            if let Some(Value::Array(entries)) = map.get("results") {
                entries
                    .iter()
                    .filter(|entry| entry.is_object())
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            } else {
                serde_json::from_value(Value::Object(map))
                    .ok()
                    .into_iter()
                    .collect()
            }
        }
        _ => Vec::new(),
    };
    payloads.into_iter()
}

fn lenient_dataset_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(name) if !name.is_empty() => Some(name),
        _ => None,
    })
}

fn lenient_scenarios<'de, D>(deserializer: D) -> Result<Vec<ScenarioEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter(|entry| entry.is_object())
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_passes<'de, D>(deserializer: D) -> Result<Vec<PassEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter(|entry| entry.is_object())
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn lenient_points<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    // Integers only; floats and negatives carry no size information.
    Ok(value.as_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_mapping_root_yields_nothing() {
        assert_eq!(dataset_payloads(json!([1, 2, 3])).count(), 0);
        assert_eq!(dataset_payloads(json!("text")).count(), 0);
        assert_eq!(dataset_payloads(json!(null)).count(), 0);
    }

    #[test]
    fn test_results_wrapper_yields_mapping_entries() {
        let root = json!({
            "results": [
                {"dataset": {"id": "5K"}, "scenarios": []},
                42,
                "skip me",
                {"dataset": {"id": "40K"}, "scenarios": []},
            ]
        });
        let ids: Vec<_> = dataset_payloads(root)
            .map(|p| p.dataset_id)
            .collect();
        assert_eq!(ids, vec![Some("5K".to_string()), Some("40K".to_string())]);
    }

    #[test]
    fn test_bare_mapping_is_a_single_payload() {
        let root = json!({"dataset": {"id": "phosphatase"}, "scenarios": []});
        let payloads: Vec<_> = dataset_payloads(root).collect();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].dataset_id.as_deref(), Some("phosphatase"));
    }

    #[test]
    fn test_dataset_id_requires_non_empty_string() {
        let empty = json!({"dataset": {"id": ""}});
        assert_eq!(dataset_payloads(empty).next().unwrap().dataset_id, None);

        let numeric = json!({"dataset": {"id": 40000}});
        assert_eq!(dataset_payloads(numeric).next().unwrap().dataset_id, None);

        let not_a_map = json!({"dataset": "5K"});
        assert_eq!(dataset_payloads(not_a_map).next().unwrap().dataset_id, None);
    }

    #[test]
    fn test_scenario_name_leniency() {
        let root = json!({
            "scenarios": [
                {"name": "zoomInOut", "passes": []},
                {"name": "", "passes": []},
                {"name": 7, "passes": []},
                {"passes": []},
            ]
        });
        let payload = dataset_payloads(root).next().unwrap();
        let names: Vec<_> = payload.scenarios.iter().map(|s| s.name.clone()).collect();
        assert_eq!(
            names,
            vec![Some("zoomInOut".to_string()), None, None, None]
        );
    }

    #[test]
    fn test_pass_field_leniency() {
        let root = json!({
            "scenarios": [{
                "name": "dragCanvas",
                "passes": [
                    {"durationMs": 12.5, "renderedPoints": 5000},
                    {"durationMs": "fast", "renderedPoints": -3},
                    {"durationMs": 8, "renderedPoints": 4999.5},
                    {},
                ],
            }]
        });
        let payload = dataset_payloads(root).next().unwrap();
        let passes = &payload.scenarios[0].passes;
        assert_eq!(passes.len(), 4);
        assert_eq!(passes[0].duration_ms, Some(12.5));
        assert_eq!(passes[0].rendered_points, Some(5000));
        assert_eq!(passes[1].duration_ms, None);
        assert_eq!(passes[1].rendered_points, None);
        assert_eq!(passes[2].duration_ms, Some(8.0));
        assert_eq!(passes[2].rendered_points, None);
        assert_eq!(passes[3].duration_ms, None);
        assert_eq!(passes[3].rendered_points, None);
    }

    #[test]
    fn test_scenarios_with_wrong_shape_degrade_to_empty() {
        let root = json!({"scenarios": "not a list"});
        let payload = dataset_payloads(root).next().unwrap();
        assert!(payload.scenarios.is_empty());

        let root = json!({"scenarios": [1, "x", null]});
        let payload = dataset_payloads(root).next().unwrap();
        assert!(payload.scenarios.is_empty());
    }
}
