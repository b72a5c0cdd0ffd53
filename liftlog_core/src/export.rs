//! CSV and JSON export of training logs and projected series.

use crate::projection::Projection;
use crate::types::{DataPoint, Exercise, TrainingLog, DATE_FORMAT};
use crate::vocabulary::{ExerciseSelector, Variation};
use crate::Result;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

const EXERCISE_HEADER: [&str; 6] = ["date", "exercise", "sets", "reps", "weight", "unit"];
const BODYWEIGHT_HEADER: [&str; 3] = ["date", "bodyweight", "unit"];

/// A row in an exercise CSV
#[derive(Debug, Serialize)]
struct ExerciseRow<'a> {
    date: &'a str,
    exercise: &'a str,
    sets: u32,
    reps: u32,
    weight: String,
    unit: &'static str,
}

/// A row in the bodyweight CSV
#[derive(Debug, Serialize)]
struct BodyweightRow<'a> {
    date: &'a str,
    bodyweight: String,
    unit: &'static str,
}

/// Which workout entries an exercise CSV contains
#[derive(Clone, Debug, PartialEq)]
pub enum ExportFilter {
    All,
    Selector(ExerciseSelector),
}

impl ExportFilter {
    fn select<'a>(&self, log: &'a TrainingLog) -> Vec<&'a Exercise> {
        match self {
            ExportFilter::All => log.workout.iter().collect(),
            ExportFilter::Selector(selector) => log.filter_by_selector(selector),
        }
    }
}

/// Write one row per matching workout entry, header included.
///
/// Returns the number of rows written.
pub fn write_exercise_rows<W: Write>(
    writer: W,
    logs: &[TrainingLog],
    filter: &ExportFilter,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(EXERCISE_HEADER)?;

    let mut count = 0;
    for log in logs {
        let date = log.simple_date();
        for exercise in filter.select(log) {
            writer.serialize(ExerciseRow {
                date: &date,
                exercise: &exercise.name,
                sets: exercise.sets,
                reps: exercise.reps,
                weight: format!("{:.2}", exercise.weight.value),
                unit: exercise.weight.unit.as_str(),
            })?;
            count += 1;
        }
    }

    writer.flush()?;
    Ok(count)
}

/// Write one bodyweight row per log, header included
pub fn write_bodyweight_rows<W: Write>(writer: W, logs: &[TrainingLog]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(BODYWEIGHT_HEADER)?;

    for log in logs {
        writer.serialize(BodyweightRow {
            date: &log.simple_date(),
            bodyweight: format!("{:.2}", log.bodyweight.value),
            unit: log.bodyweight.unit.as_str(),
        })?;
    }

    writer.flush()?;
    Ok(logs.len())
}

/// The exercise CSV files written by `export_csv`
pub fn standard_csv_exports() -> Vec<(&'static str, ExportFilter)> {
    vec![
        ("all.csv", ExportFilter::All),
        (
            "squats.csv",
            ExportFilter::Selector(Variation::Squat.into()),
        ),
        (
            "comp_squats.csv",
            ExportFilter::Selector(ExerciseSelector::names([
                "low bar squats",
                "belted low bar squats",
            ])),
        ),
        ("bench.csv", ExportFilter::Selector(Variation::Bench.into())),
        (
            "deadlift.csv",
            ExportFilter::Selector(Variation::Deadlift.into()),
        ),
    ]
}

/// Write `bodyweight.csv` and the standard exercise CSVs into `dir`
pub fn export_csv(dir: &Path, logs: &[TrainingLog]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join("bodyweight.csv");
    write_bodyweight_rows(std::fs::File::create(&path)?, logs)?;
    written.push(path);

    for (file_name, filter) in standard_csv_exports() {
        let path = dir.join(file_name);
        let rows = write_exercise_rows(std::fs::File::create(&path)?, logs, &filter)?;
        tracing::debug!("Wrote {} rows to {:?}", rows, path);
        written.push(path);
    }

    tracing::info!("Exported {} CSV files to {:?}", written.len(), dir);
    Ok(written)
}

/// A point of an exported JSON series
#[derive(Debug, Serialize)]
struct JsonPoint {
    date: String,
    value: f64,
}

/// Serialize a series as `[{"date": "YYYY-MM-DD", "value": n}, ...]`
pub fn series_to_json(points: &[DataPoint]) -> Result<Vec<u8>> {
    let points: Vec<JsonPoint> = points
        .iter()
        .map(|p| JsonPoint {
            date: p.timestamp.format(DATE_FORMAT).to_string(),
            value: p.value,
        })
        .collect();
    Ok(serde_json::to_vec(&points)?)
}

/// The series written by `export_json`, keyed by file stem
pub fn standard_json_series() -> Vec<(&'static str, Projection)> {
    let names = |names: &[&str]| ExerciseSelector::names(names.iter().copied());
    vec![
        ("bodyweight", Projection::Bodyweight),
        ("training_duration", Projection::TrainingDuration),
        (
            "belted_low_bar_squats_intensity",
            Projection::Intensity(names(&["belted low bar squats"])),
        ),
        (
            "low_bar_squats_intensity",
            Projection::Intensity(names(&["low bar squats"])),
        ),
        (
            "squats_tonnage",
            Projection::Tonnage(names(&[
                "low bar squats",
                "high bar squats",
                "front squats",
                "belted low bar squats",
            ])),
        ),
        (
            "bench_intensity",
            Projection::Intensity(names(&["bench press", "close grip bench press"])),
        ),
        (
            "bench_tonnage",
            Projection::Tonnage(names(&["bench press", "close grip bench press"])),
        ),
        (
            "deadlift_intensity",
            Projection::Intensity(names(&["sumo deadlift", "conventional deadlift"])),
        ),
        (
            "deadlift_tonnage",
            Projection::Tonnage(names(&["sumo deadlift", "conventional deadlift"])),
        ),
    ]
}

/// Write every standard series as `<stem>.json` into `dir`
pub fn export_json(dir: &Path, logs: &[TrainingLog]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    for (stem, projection) in standard_json_series() {
        let path = dir.join(format!("{}.json", stem));
        std::fs::write(&path, series_to_json(&projection.project(logs))?)?;
        written.push(path);
    }

    tracing::info!("Exported {} JSON series to {:?}", written.len(), dir);
    Ok(written)
}
