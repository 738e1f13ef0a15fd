use std::fmt::Display;

use chrono::TimeZone;
use fitchart_algos::{
    ActivityAggregator, GoalProgress, SleepTransition, StepsSummary, helpers::format_hm::FormatHM,
};
use fitchart_types::{ActivityGoals, ActivitySample};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub sample_count: usize,
    pub steps: StepsSummary,
    pub sleep_minutes: i64,
    pub transitions: Vec<SleepTransition>,
    pub progress: GoalProgress,
}

impl ChartReport {
    pub fn new<Tz: TimeZone>(samples: &[ActivitySample], goals: &ActivityGoals, tz: &Tz) -> Self {
        let steps = StepsSummary::new(ActivityAggregator::daily_steps(samples, tz));
        let sleep_minutes = ActivityAggregator::sleep_minutes(samples);
        let progress = GoalProgress::new(steps.total_steps, sleep_minutes, goals);
        debug!(
            "Report over {} samples: {} steps, {} minutes asleep",
            samples.len(),
            steps.total_steps,
            sleep_minutes
        );

        Self {
            sample_count: samples.len(),
            steps,
            sleep_minutes,
            transitions: ActivityAggregator::sleep_transitions(samples),
            progress,
        }
    }
}

impl Display for ChartReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Samples: {}\nTotal steps: {}\nDaily average: {}\n",
            self.sample_count, self.steps.total_steps, self.steps.daily_average,
        ))?;
        for day in &self.steps.days {
            f.write_fmt(format_args!("\t{}: {}\n", day.day, day.steps))?;
        }
        f.write_fmt(format_args!(
            "Sleep: {}\nGoals:\n\tSteps: {:.0}%\n\tSleep: {:.0}%\nDistance: {:.2}km",
            self.sleep_minutes.format_hm(),
            self.progress.steps * 100.0,
            self.progress.sleep * 100.0,
            self.progress.distance_meters / 1000.0,
        ))
    }
}
