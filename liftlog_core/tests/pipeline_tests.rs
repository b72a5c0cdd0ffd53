//! End-to-end tests for the load -> decode -> project pipeline.

use chrono::Duration;
use liftlog_core::projection::{project_bodyweight, project_exercise_tonnage};
use liftlog_core::*;
use std::fs;

const BENCH_DAY: &str = r#"
date: "2022-05-01"
time: "6:00PM"
length: 1h30m
bodyweight: 180lbs
workout:
  - name: bench press
    weight: 200lbs
    sets: "3"
    reps: "5"
"#;

#[test]
fn test_single_log_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("2022-05-01.yml"), BENCH_DAY).unwrap();

    let logs = load_directory(temp_dir.path(), default_vocabulary()).unwrap();
    assert_eq!(logs.len(), 1);

    let log = &logs[0];
    assert_eq!(log.bodyweight, Weight::new(180.0, WeightUnit::Lbs));
    assert_eq!(log.duration, Duration::minutes(90));
    assert_eq!(
        log.workout,
        vec![Exercise {
            name: "bench press".into(),
            weight: Weight::new(200.0, WeightUnit::Lbs),
            sets: 3,
            reps: 5,
            exertion: None,
        }]
    );

    let bodyweight = project_bodyweight(&logs);
    assert_eq!(bodyweight.len(), 1);
    assert_eq!(bodyweight[0].timestamp.format(DATE_FORMAT).to_string(), "2022-05-01");
    assert_eq!(bodyweight[0].value, 180.0);
    assert_eq!(bodyweight[0].unit.as_deref(), Some("lbs"));

    let tonnage = project_exercise_tonnage(&logs, &ExerciseSelector::names(["bench press"]));
    assert_eq!(tonnage.len(), 1);
    assert_eq!(tonnage[0].timestamp.format(DATE_FORMAT).to_string(), "2022-05-01");
    assert_eq!(tonnage[0].value, 3000.0);
    assert_eq!(tonnage[0].unit.as_deref(), Some("lbs"));
}

#[test]
fn test_partitioned_collection_emits_metrics() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("2021")).unwrap();
    fs::write(
        root.join("2021/2021-12-30.yml"),
        BENCH_DAY.replace("2022-05-01", "2021-12-30"),
    )
    .unwrap();
    fs::write(root.join("2022-05-01.yml"), BENCH_DAY).unwrap();

    let logs = load_directory(root, default_vocabulary()).unwrap();
    let records = project_statistics(&logs, &["bench press"], "tester");

    let sink_path = root.join("out/metrics.jsonl");
    JsonlSink::new(&sink_path).append(&records).unwrap();

    let read_back = liftlog_core::sink::read_records(&sink_path).unwrap();
    assert_eq!(read_back, records);

    let tonnage: Vec<f64> = read_back
        .iter()
        .filter(|r| r.series == "bench_press_tonnage")
        .map(|r| r.value)
        .collect();
    assert_eq!(tonnage, vec![3000.0, 3000.0]);
}

#[test]
fn test_invalid_exercise_names_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("2022-05-01.yml");
    fs::write(&path, BENCH_DAY.replace("bench press", "bench pres")).unwrap();

    let err = load_directory(temp_dir.path(), default_vocabulary()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("2022-05-01.yml"), "{}", message);
    assert!(message.contains("bench pres"), "{}", message);
    assert!(matches!(
        err,
        Error::Decode {
            source: DecodeError::InvalidExercise { .. },
            ..
        }
    ));
}
