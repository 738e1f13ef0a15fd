use std::{fs, path::Path};

use anyhow::Context as _;
use fitchart_types::ActivitySample;

pub fn load_samples(path: impl AsRef<Path>) -> anyhow::Result<Vec<ActivitySample>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples from `{}`", path.display()))?;
    let samples = parse_samples(&content)
        .with_context(|| format!("Invalid samples in `{}`", path.display()))?;

    info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parses a JSON array of samples.
///
/// Samples are expected in timestamp order. Out of order input is logged
/// but kept as is.
pub fn parse_samples(content: &str) -> anyhow::Result<Vec<ActivitySample>> {
    let samples: Vec<ActivitySample> = serde_json::from_str(content)?;

    if let Some(pos) = samples
        .windows(2)
        .position(|w| w[1].timestamp < w[0].timestamp)
    {
        warn!(
            "Samples are not ordered by timestamp (index {}: {} < {})",
            pos + 1,
            samples[pos + 1].timestamp,
            samples[pos].timestamp
        );
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitchart_types::ActivityKind;

    #[test]
    fn parse_array() {
        let json = r#"[
            {"timestamp": 0, "user_id": 1, "device_id": 1, "kind": "WALKING", "value": 100},
            {"timestamp": 60, "user_id": 1, "device_id": 1, "kind": "LIGHT_SLEEP"}
        ]"#;
        let samples = parse_samples(json).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].kind, ActivityKind::Walking);
        assert_eq!(samples[1].value, 0);
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_samples("[]").unwrap().is_empty());
    }

    #[test]
    fn unordered_samples_are_kept() {
        let json = r#"[
            {"timestamp": 60, "user_id": 1, "device_id": 1, "kind": "WALKING", "value": 1},
            {"timestamp": 0, "user_id": 1, "device_id": 1, "kind": "WALKING", "value": 2}
        ]"#;
        let samples = parse_samples(json).unwrap();
        assert_eq!(samples[0].timestamp, 60);
    }

    #[test]
    fn null_is_rejected() {
        assert!(parse_samples("null").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = load_samples("/nonexistent/samples.json").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/samples.json"));
    }
}
