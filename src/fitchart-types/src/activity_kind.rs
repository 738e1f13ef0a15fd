use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Classification of a recorded sample.
///
/// The discriminants are the stable codes stored alongside samples, so
/// they must never be renumbered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(from = "String", into = "&'static str")]
#[repr(i32)]
pub enum ActivityKind {
    NotMeasured = -1,
    #[default]
    Unknown = 0,
    Activity = 1,
    LightSleep = 2,
    DeepSleep = 4,
    NotWorn = 8,
    Running = 16,
    Walking = 32,
    Swimming = 64,
    Cycling = 128,
    Treadmill = 256,
    Exercise = 512,
}

impl ActivityKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::NotMeasured,
            1 => Self::Activity,
            2 => Self::LightSleep,
            4 => Self::DeepSleep,
            8 => Self::NotWorn,
            16 => Self::Running,
            32 => Self::Walking,
            64 => Self::Swimming,
            128 => Self::Cycling,
            256 => Self::Treadmill,
            512 => Self::Exercise,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

// Unrecognized names deserialize as `Unknown`.
impl From<String> for ActivityKind {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip_for_every_kind() {
        for kind in ActivityKind::iter() {
            assert_eq!(ActivityKind::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn unrecognized_code_is_unknown() {
        assert_eq!(ActivityKind::from_code(3), ActivityKind::Unknown);
        assert_eq!(ActivityKind::from_code(1024), ActivityKind::Unknown);
        assert_eq!(ActivityKind::from_code(i32::MIN), ActivityKind::Unknown);
    }

    #[test]
    fn display_uses_screaming_snake_case() {
        assert_eq!(ActivityKind::DeepSleep.to_string(), "DEEP_SLEEP");
        assert_eq!(ActivityKind::NotMeasured.to_string(), "NOT_MEASURED");
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&ActivityKind::LightSleep).unwrap();
        assert_eq!(json, "\"LIGHT_SLEEP\"");
    }

    #[test]
    fn deserializes_unknown_name_as_unknown() {
        let kind: ActivityKind = serde_json::from_str("\"REM_SLEEP\"").unwrap();
        assert_eq!(kind, ActivityKind::Unknown);

        let kind: ActivityKind = serde_json::from_str("\"WALKING\"").unwrap();
        assert_eq!(kind, ActivityKind::Walking);
    }
}
