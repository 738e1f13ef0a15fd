use serde::{Deserialize, Serialize};

/// Per-user targets the dashboards measure progress against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityGoals {
    pub steps_goal: u32,
    pub sleep_duration_goal_hours: u32,
    pub step_length_cm: u32,
}

impl ActivityGoals {
    pub const DEFAULT_STEPS_GOAL: u32 = 8000;
    pub const DEFAULT_SLEEP_DURATION_GOAL_HOURS: u32 = 7;
    /// Roughly 0.43 of a 175cm body height.
    pub const DEFAULT_STEP_LENGTH_CM: u32 = 75;

    pub fn sleep_duration_goal_minutes(&self) -> u32 {
        self.sleep_duration_goal_hours.saturating_mul(60)
    }
}

impl Default for ActivityGoals {
    fn default() -> Self {
        Self {
            steps_goal: Self::DEFAULT_STEPS_GOAL,
            sleep_duration_goal_hours: Self::DEFAULT_SLEEP_DURATION_GOAL_HOURS,
            step_length_cm: Self::DEFAULT_STEP_LENGTH_CM,
        }
    }
}
