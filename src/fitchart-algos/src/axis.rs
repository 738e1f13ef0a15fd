use std::fmt::Display;

use chrono::{
    DateTime, Local, TimeZone, Utc,
    format::{Item, StrftimeItems},
};

use crate::{ChartError, TimestampTranslation};

/// Turns an axis coordinate into the text drawn next to it.
pub trait AxisValueFormatter {
    fn format_value(&self, value: f32) -> String;
}

/// Formats epoch seconds as a time of day in a fixed time zone.
///
/// Every call derives its instant from the input alone, so a formatter can
/// be shared between threads whenever `Tz` allows it.
#[derive(Debug, Clone)]
pub struct TimestampFormatter<Tz: TimeZone> {
    pattern: String,
    tz: Tz,
}

impl<Tz> TimestampFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// 24 hour clock, no seconds.
    pub const DEFAULT_PATTERN: &'static str = "%H:%M";

    pub fn new(tz: Tz) -> Self {
        Self {
            pattern: Self::DEFAULT_PATTERN.to_owned(),
            tz,
        }
    }

    pub fn with_pattern(pattern: impl Into<String>, tz: Tz) -> Result<Self, ChartError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidPattern(pattern));
        }

        Ok(Self { pattern, tz })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    pub fn format(&self, value: i32) -> String {
        self.format_seconds(i64::from(value))
    }

    /// Like [`Self::format`] for wider values. Seconds outside chrono's
    /// range render as the epoch.
    pub fn format_seconds(&self, value: i64) -> String {
        let instant: DateTime<Utc> = DateTime::from_timestamp(value, 0).unwrap_or_default();
        instant
            .with_timezone(&self.tz)
            .format(&self.pattern)
            .to_string()
    }
}

impl TimestampFormatter<Utc> {
    pub fn utc() -> Self {
        Self::new(Utc)
    }
}

impl TimestampFormatter<Local> {
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl Default for TimestampFormatter<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz> AxisValueFormatter for TimestampFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn format_value(&self, value: f32) -> String {
        self.format(value as i32)
    }
}

/// Labels an axis whose coordinates were shortened by a
/// [`TimestampTranslation`].
#[derive(Debug, Clone)]
pub struct SampleLabelFormatter<Tz: TimeZone> {
    translation: TimestampTranslation,
    formatter: TimestampFormatter<Tz>,
}

impl<Tz> SampleLabelFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(translation: TimestampTranslation, formatter: TimestampFormatter<Tz>) -> Self {
        Self {
            translation,
            formatter,
        }
    }

    /// Labels an exact shortened coordinate without going through `f32`.
    pub fn format_exact(&self, value: i64) -> String {
        self.formatter.format_seconds(self.translation.to_original(value))
    }
}

impl<Tz> AxisValueFormatter for SampleLabelFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn format_value(&self, value: f32) -> String {
        self.format_exact(value as i64)
    }
}

/// Looks labels up by coordinate, for axes indexed 0, 1, 2, ...
#[derive(Debug, Clone, Default)]
pub struct IndexLabelFormatter {
    labels: Vec<String>,
}

impl IndexLabelFormatter {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

impl AxisValueFormatter for IndexLabelFormatter {
    fn format_value(&self, value: f32) -> String {
        if value >= 0.0 {
            if let Some(label) = self.labels.get(value as usize) {
                return label.clone();
            }
        }
        value.to_string()
    }
}
