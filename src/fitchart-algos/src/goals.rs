use fitchart_types::ActivityGoals;
use serde::Serialize;

/// How far a day has come towards the user's goals, each factor in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub steps: f32,
    pub sleep: f32,
    pub distance_meters: f32,
}

impl GoalProgress {
    pub fn new(total_steps: i64, sleep_minutes: i64, goals: &ActivityGoals) -> Self {
        Self {
            steps: Self::steps_goal_factor(total_steps, goals),
            sleep: Self::sleep_goal_factor(sleep_minutes, goals),
            distance_meters: Self::distance_meters(total_steps, goals),
        }
    }

    pub fn steps_goal_factor(total_steps: i64, goals: &ActivityGoals) -> f32 {
        Self::factor(total_steps, i64::from(goals.steps_goal))
    }

    pub fn sleep_goal_factor(sleep_minutes: i64, goals: &ActivityGoals) -> f32 {
        Self::factor(sleep_minutes, i64::from(goals.sleep_duration_goal_minutes()))
    }

    pub fn distance_meters(steps: i64, goals: &ActivityGoals) -> f32 {
        (steps * i64::from(goals.step_length_cm)) as f32 / 100.0
    }

    fn factor(value: i64, goal: i64) -> f32 {
        if goal <= 0 {
            return 0.0;
        }
        (value as f32 / goal as f32).clamp(0.0, 1.0)
    }
}
