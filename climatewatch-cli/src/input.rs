//! Observation input: JSON files or built-in sample conditions.

use anyhow::{Context, Result};
use climatewatch_core::{Observation, Zone};
use std::{fs, path::Path};

/// Read a single observation object from a JSON file.
pub fn read_observation(path: &Path) -> Result<Observation> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read observation file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse observation JSON: {}", path.display()))
}

/// Read a JSON array of observations.
pub fn read_history(path: &Path) -> Result<Vec<Observation>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;

    serde_json::from_str(&contents).with_context(|| {
        format!("Failed to parse history JSON (expected an array of observations): {}", path.display())
    })
}

/// Demonstration conditions for `alerts`: the zone's normals nudged slightly warmer.
pub fn sample_alert_conditions(zone: &Zone) -> Observation {
    Observation {
        temperature_c: Some(zone.avg_temp_c + 2.0),
        rainfall_mm: Some(zone.avg_rainfall_mm / 30.0),
        humidity_pct: Some(65.0),
        wind_kmh: Some(15.0),
        rainfall_deficit_pct: Some(10.0),
    }
}

/// Demonstration conditions for `report`: the zone's normals.
pub fn sample_report_conditions(zone: &Zone) -> Observation {
    Observation {
        temperature_c: Some(zone.avg_temp_c),
        rainfall_mm: Some(zone.avg_rainfall_mm / 30.0),
        humidity_pct: Some(65.0),
        wind_kmh: Some(12.0),
        rainfall_deficit_pct: Some(5.0),
    }
}

/// The fields the caller actually supplied, in declaration order.
pub fn present_fields(obs: &Observation) -> Vec<(&'static str, f64)> {
    [
        ("temperature_c", obs.temperature_c),
        ("rainfall_mm", obs.rainfall_mm),
        ("humidity_pct", obs.humidity_pct),
        ("wind_kmh", obs.wind_kmh),
        ("rainfall_deficit_pct", obs.rainfall_deficit_pct),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|v| (name, v)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use climatewatch_core::{AlertEvaluator, ZoneCatalog};
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("climatewatch-input-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        let path = dir.join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn reads_partial_observation() {
        let path = scratch_file("obs.json", r#"{"rainfall_mm": 250, "wind_kmh": 70}"#);
        let obs = read_observation(&path).expect("valid JSON");

        assert_eq!(obs.rainfall_mm, Some(250.0));
        assert_eq!(obs.wind_kmh, Some(70.0));
        assert_eq!(obs.temperature_c, None);
    }

    #[test]
    fn reads_history_array() {
        let path = scratch_file(
            "history.json",
            r#"[{"temperature_c": 30.0, "rainfall_mm": 2.0}, {"temperature_c": 31.0}]"#,
        );
        let history = read_history(&path).expect("valid JSON");

        assert_eq!(history.len(), 2);
        assert_eq!(history[1].rainfall_mm, None);
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let path = scratch_file("broken.json", "{ not json");
        let err = read_observation(&path).unwrap_err();

        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_history(Path::new("/nonexistent/climatewatch/history.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read history file"));
    }

    #[test]
    fn sample_conditions_raise_no_alerts() {
        let catalog = ZoneCatalog::new();
        let evaluator = AlertEvaluator::new();

        for zone in catalog.all_zones() {
            assert!(evaluator.evaluate(zone, &sample_alert_conditions(zone)).is_empty());
            assert!(evaluator.evaluate(zone, &sample_report_conditions(zone)).is_empty());
        }
    }

    #[test]
    fn present_fields_skips_absent_values() {
        let obs = Observation {
            temperature_c: Some(30.0),
            wind_kmh: Some(12.0),
            ..Default::default()
        };

        assert_eq!(present_fields(&obs), vec![("temperature_c", 30.0), ("wind_kmh", 12.0)]);
    }
}
