//! Projections of a training log collection into time series.
//!
//! Every projection is pure: it reads the collection and returns one
//! `DataPoint` per session (or per matching entry, for frequency), in
//! collection order.

use crate::duration::as_hours;
use crate::types::{DataPoint, Exercise, TrainingLog};
use crate::vocabulary::ExerciseSelector;

/// Bodyweight per session
pub fn project_bodyweight(logs: &[TrainingLog]) -> Vec<DataPoint> {
    logs.iter()
        .map(|log| {
            DataPoint::new(
                log.timestamp,
                log.bodyweight.value,
                Some(log.bodyweight.unit.to_string()),
            )
        })
        .collect()
}

/// Session length in hours
pub fn project_training_duration(logs: &[TrainingLog]) -> Vec<DataPoint> {
    logs.iter()
        .map(|log| DataPoint::new(log.timestamp, as_hours(&log.duration), Some("hours".into())))
        .collect()
}

/// Heaviest matching working weight per timestamp.
///
/// Same-timestamp candidates collapse into a single point holding the
/// maximum weight, even across logs sharing a timestamp.
pub fn project_exercise_intensity(
    logs: &[TrainingLog],
    selector: &ExerciseSelector,
) -> Vec<DataPoint> {
    let mut points: Vec<DataPoint> = Vec::new();

    for log in logs {
        for exercise in log.filter_by_selector(selector) {
            let candidate = DataPoint::new(
                log.timestamp,
                exercise.weight.value,
                Some(exercise.weight.unit.to_string()),
            );

            match points.iter_mut().find(|p| p.timestamp == candidate.timestamp) {
                Some(existing) if existing.value >= candidate.value => {}
                Some(existing) => *existing = candidate,
                None => points.push(candidate),
            }
        }
    }

    tracing::trace!("Projected {} intensity points", points.len());
    points
}

/// Total `weight * reps * sets` of matching entries per session.
///
/// Sessions without a match produce no point. The unit is the one of the
/// last matching entry of the session.
pub fn project_exercise_tonnage(
    logs: &[TrainingLog],
    selector: &ExerciseSelector,
) -> Vec<DataPoint> {
    daily_sum(logs, selector, |e| {
        e.weight.value * f64::from(e.reps) * f64::from(e.sets)
    })
}

/// Total `reps * sets` of matching entries per session
pub fn project_exercise_bar_lifts(
    logs: &[TrainingLog],
    selector: &ExerciseSelector,
) -> Vec<DataPoint> {
    daily_sum(logs, selector, |e| f64::from(e.reps) * f64::from(e.sets))
}

/// One unit-less tick of value 1 per matching entry
pub fn project_exercise_frequency(
    logs: &[TrainingLog],
    selector: &ExerciseSelector,
) -> Vec<DataPoint> {
    logs.iter()
        .flat_map(|log| {
            log.filter_by_selector(selector)
                .into_iter()
                .map(move |_| DataPoint::new(log.timestamp, 1.0, None))
        })
        .collect()
}

fn daily_sum<F>(logs: &[TrainingLog], selector: &ExerciseSelector, amount: F) -> Vec<DataPoint>
where
    F: Fn(&Exercise) -> f64,
{
    let mut points = Vec::new();

    for log in logs {
        let mut total = 0.0;
        let mut unit = None;
        for exercise in log.filter_by_selector(selector) {
            total += amount(exercise);
            unit = Some(exercise.weight.unit);
        }

        if let Some(unit) = unit {
            points.push(DataPoint::new(log.timestamp, total, Some(unit.to_string())));
        }
    }

    points
}

/// A named time series over a log collection
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Bodyweight,
    TrainingDuration,
    Intensity(ExerciseSelector),
    Tonnage(ExerciseSelector),
    BarLifts(ExerciseSelector),
    Frequency(ExerciseSelector),
}

impl Projection {
    pub fn project(&self, logs: &[TrainingLog]) -> Vec<DataPoint> {
        match self {
            Projection::Bodyweight => project_bodyweight(logs),
            Projection::TrainingDuration => project_training_duration(logs),
            Projection::Intensity(selector) => project_exercise_intensity(logs, selector),
            Projection::Tonnage(selector) => project_exercise_tonnage(logs, selector),
            Projection::BarLifts(selector) => project_exercise_bar_lifts(logs, selector),
            Projection::Frequency(selector) => project_exercise_frequency(logs, selector),
        }
    }

    /// Series suffix for per-exercise projections, full name otherwise
    pub fn suffix(&self) -> &'static str {
        match self {
            Projection::Bodyweight => "bodyweight",
            Projection::TrainingDuration => "training_duration",
            Projection::Intensity(_) => "intensity",
            Projection::Tonnage(_) => "tonnage",
            Projection::BarLifts(_) => "barlifts",
            Projection::Frequency(_) => "frequency",
        }
    }
}
