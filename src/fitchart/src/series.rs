use std::fmt::Display;

use chrono::TimeZone;
use fitchart_algos::{
    ActivityAggregator, SampleLabelFormatter, TimestampFormatter, TimestampTranslation,
};
use fitchart_types::{ActivityKind, ActivitySample};
use serde::Serialize;

/// One chart entry, `x` is relative to the first plotted sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: i64,
    pub label: String,
    pub kind: ActivityKind,
    pub value: i32,
}

/// Lays samples out on a chart x axis, optionally padded to `range`.
pub fn build_series<Tz>(
    mut samples: Vec<ActivitySample>,
    range: Option<(i32, i32)>,
    formatter: TimestampFormatter<Tz>,
) -> Vec<SeriesPoint>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if let Some((start, end)) = range {
        ActivityAggregator::ensure_start_and_end_samples(&mut samples, start, end);
    }

    let mut translation = TimestampTranslation::new();
    let xs = samples
        .iter()
        .map(|s| translation.shorten(s.timestamp))
        .collect::<Vec<_>>();
    let labels = SampleLabelFormatter::new(translation, formatter);

    samples
        .iter()
        .zip(xs)
        .map(|(sample, x)| SeriesPoint {
            x,
            label: labels.format_exact(x),
            kind: sample.kind,
            value: sample.value,
        })
        .collect()
}
