use serde::{Deserialize, Serialize};

use crate::ActivityKind;

/// One timestamped, typed and valued observation.
///
/// `timestamp` is in seconds since the epoch. `value` is the magnitude
/// recorded for the sample interval, the step count for step samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySample {
    pub timestamp: i32,
    pub user_id: i64,
    pub device_id: i64,
    pub kind: ActivityKind,
    #[serde(default)]
    pub value: i32,
}

impl ActivitySample {
    pub fn new(timestamp: i32, kind: ActivityKind, value: i32) -> Self {
        Self {
            timestamp,
            user_id: 0,
            device_id: 0,
            kind,
            value,
        }
    }

    /// Placeholder that pads a series out to a given timestamp.
    ///
    /// Carries the owner of `reference` but no measurement, so it never
    /// contributes to totals.
    pub fn trailing(reference: &ActivitySample, timestamp: i32) -> Self {
        Self {
            timestamp,
            user_id: reference.user_id,
            device_id: reference.device_id,
            kind: ActivityKind::NotMeasured,
            value: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_keeps_owner() {
        let reference = ActivitySample {
            timestamp: 1_000,
            user_id: 7,
            device_id: 3,
            kind: ActivityKind::Walking,
            value: 120,
        };
        let padding = ActivitySample::trailing(&reference, 2_000);

        assert_eq!(padding.timestamp, 2_000);
        assert_eq!(padding.user_id, 7);
        assert_eq!(padding.device_id, 3);
        assert_eq!(padding.value, 0);
        assert_eq!(padding.kind, ActivityKind::NotMeasured);
    }

    #[test]
    fn deserialize_from_json() {
        let json = r#"{"timestamp":60,"user_id":1,"device_id":2,"kind":"DEEP_SLEEP","value":0}"#;
        let sample: ActivitySample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.kind, ActivityKind::DeepSleep);
        assert_eq!(sample.timestamp, 60);
    }

    #[test]
    fn value_defaults_to_zero() {
        let json = r#"{"timestamp":60,"user_id":1,"device_id":2,"kind":"NOT_WORN"}"#;
        let sample: ActivitySample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.value, 0);
    }
}
