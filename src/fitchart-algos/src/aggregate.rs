use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fitchart_types::{ActivityKind, ActivitySample};
use serde::Serialize;

/// Derived values over an ordered series of samples.
pub struct ActivityAggregator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "timestamp", rename_all = "snake_case")]
pub enum SleepTransition {
    FellAsleep(i32),
    WokeUp(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepsDay {
    pub day: NaiveDate,
    pub steps: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepsSummary {
    pub days: Vec<StepsDay>,
    pub total_steps: i64,
    /// Average over the days that have any steps at all.
    pub daily_average: i64,
    pub today: Option<StepsDay>,
}

impl ActivityAggregator {
    pub fn is_sleep(kind: ActivityKind) -> bool {
        matches!(kind, ActivityKind::DeepSleep | ActivityKind::LightSleep)
    }

    /// Sums `value` over every sample regardless of its kind.
    pub fn total_steps_of(samples: &[ActivitySample]) -> i64 {
        samples.iter().map(|s| i64::from(s.value)).sum()
    }

    /// Pads a non-empty series with placeholders so it spans
    /// `ts_start..=ts_end`.
    pub fn ensure_start_and_end_samples(
        samples: &mut Vec<ActivitySample>,
        ts_start: i32,
        ts_end: i32,
    ) {
        let (Some(first), Some(last)) = (samples.first().copied(), samples.last().copied()) else {
            return;
        };

        if last.timestamp < ts_end {
            samples.push(ActivitySample::trailing(&last, ts_end));
        }

        if first.timestamp > ts_start {
            samples.insert(0, ActivitySample::trailing(&first, ts_start));
        }
    }

    pub fn sleep_transitions(samples: &[ActivitySample]) -> Vec<SleepTransition> {
        let mut transitions = Vec::new();
        let mut last_kind = ActivityKind::Unknown;

        for sample in samples {
            if sample.kind != last_kind {
                let was_asleep = Self::is_sleep(last_kind);
                let is_asleep = Self::is_sleep(sample.kind);
                if was_asleep && !is_asleep {
                    transitions.push(SleepTransition::WokeUp(sample.timestamp));
                } else if !was_asleep && is_asleep {
                    transitions.push(SleepTransition::FellAsleep(sample.timestamp));
                }
            }
            last_kind = sample.kind;
        }

        transitions
    }

    /// Each sleep sample covers the time until the next sample.
    pub fn sleep_minutes(samples: &[ActivitySample]) -> i64 {
        let seconds = samples
            .windows(2)
            .filter(|w| Self::is_sleep(w[0].kind))
            .map(|w| (i64::from(w[1].timestamp) - i64::from(w[0].timestamp)).max(0))
            .sum::<i64>();

        seconds / 60
    }

    pub fn daily_steps<Tz: TimeZone>(samples: &[ActivitySample], tz: &Tz) -> Vec<StepsDay> {
        let mut days = BTreeMap::<NaiveDate, i64>::new();

        for sample in samples {
            let instant: DateTime<Utc> =
                DateTime::from_timestamp(i64::from(sample.timestamp), 0).unwrap_or_default();
            let day = instant.with_timezone(tz).date_naive();
            *days.entry(day).or_default() += i64::from(sample.value);
        }

        days.into_iter()
            .map(|(day, steps)| StepsDay { day, steps })
            .collect()
    }
}

impl StepsSummary {
    pub fn new(days: Vec<StepsDay>) -> Self {
        let total_steps = days.iter().map(|d| d.steps).sum::<i64>();
        let active_days = days.iter().filter(|d| d.steps > 0).count() as i64;
        let daily_average = if active_days > 0 {
            total_steps / active_days
        } else {
            0
        };
        let today = days.last().copied();

        Self {
            days,
            total_steps,
            daily_average,
            today,
        }
    }
}
