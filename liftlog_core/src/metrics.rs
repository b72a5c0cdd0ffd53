//! Metric records for time-series sinks.
//!
//! Each projected data point becomes a record named after the exercise and
//! the projection, e.g. `low_bar_squats_intensity`.

use crate::projection::Projection;
use crate::types::{DataPoint, TrainingLog};
use crate::vocabulary::ExerciseSelector;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Tags attached to every record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricTags {
    pub username: String,
    /// Empty for unit-less series such as frequency
    pub unit: String,
}

/// One point of a named series, ready for a metrics sink
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    pub series: String,
    pub tags: MetricTags,
    pub value: f64,
    pub timestamp: NaiveDateTime,
}

impl MetricRecord {
    pub fn from_point(series: &str, username: &str, point: &DataPoint) -> Self {
        Self {
            series: series.to_string(),
            tags: MetricTags {
                username: username.to_string(),
                unit: point.unit.clone().unwrap_or_default(),
            },
            value: point.value,
            timestamp: point.timestamp,
        }
    }
}

/// `"low bar squats"` + `"intensity"` -> `"low_bar_squats_intensity"`
pub fn series_name(exercise: &str, suffix: &str) -> String {
    format!("{}_{}", exercise.replace(' ', "_"), suffix)
}

/// Project the standard statistics for `exercises` into metric records.
///
/// For each exercise: intensity, tonnage, bar-lifts and frequency. Then
/// training duration and bodyweight for every log.
pub fn project_statistics<S: AsRef<str>>(
    logs: &[TrainingLog],
    exercises: &[S],
    username: &str,
) -> Vec<MetricRecord> {
    let mut records = Vec::new();

    for exercise in exercises {
        let exercise = exercise.as_ref();
        let selector = ExerciseSelector::names([exercise]);
        for projection in [
            Projection::Intensity(selector.clone()),
            Projection::Tonnage(selector.clone()),
            Projection::BarLifts(selector.clone()),
            Projection::Frequency(selector),
        ] {
            let series = series_name(exercise, projection.suffix());
            let points = projection.project(logs);
            tracing::debug!("Projecting {} points for {}", points.len(), series);
            records.extend(
                points
                    .iter()
                    .map(|p| MetricRecord::from_point(&series, username, p)),
            );
        }
    }

    for projection in [Projection::TrainingDuration, Projection::Bodyweight] {
        let series = projection.suffix();
        records.extend(
            projection
                .project(logs)
                .iter()
                .map(|p| MetricRecord::from_point(series, username, p)),
        );
    }

    records
}
