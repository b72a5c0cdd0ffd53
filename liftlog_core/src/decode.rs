//! Raw training log records and their validated decoding.
//!
//! A log file deserializes tolerantly into [`RawTrainingLog`] (every field is
//! text, unknown fields are ignored). [`decode`] then turns it into a
//! [`TrainingLog`], failing on the first malformed field.

use crate::duration::parse_duration;
use crate::error::{DecodeError, EventError};
use crate::types::{Event, Exercise, TrainingLog, TIMESTAMP_FORMAT};
use crate::vocabulary::Vocabulary;
use crate::weight::parse_weight;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// A workout entry as written in a log file
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawExercise {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub weight: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub sets: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub reps: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub exertion: String,
}

/// An event block as written in a log file
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub wilks: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub total: String,
}

/// A training log file before validation
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawTrainingLog {
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub time: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub length: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub bodyweight: String,
    #[serde(default)]
    pub event: Option<RawEvent>,
    #[serde(default)]
    pub workout: Vec<RawExercise>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl RawTrainingLog {
    pub fn from_yaml(content: &str) -> Result<Self, DecodeError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Accept any YAML scalar as text, so `sets: 3` and `sets: "3"` read the same
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    let text = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Int(i)) => i.to_string(),
        // `{:?}` keeps the fraction, so `3.0` never passes as an integer count
        Some(Scalar::Float(f)) => format!("{:?}", f),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    };
    Ok(text)
}

/// Validate a raw record into a `TrainingLog`.
///
/// Exercise names are checked against `vocabulary`. The first failing
/// field aborts the whole record.
pub fn decode(raw: RawTrainingLog, vocabulary: &Vocabulary) -> Result<TrainingLog, DecodeError> {
    let stamp = format!("{} {}", raw.date, raw.time);
    let timestamp = NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT)
        .map_err(|source| DecodeError::Time {
            input: stamp.clone(),
            source,
        })?;

    let duration = parse_duration(&raw.length)?;

    let bodyweight = parse_weight(&raw.bodyweight).map_err(|source| DecodeError::Bodyweight {
        input: raw.bodyweight.clone(),
        source,
    })?;

    let event = match raw.event {
        Some(event) if !event.name.is_empty() => Some(decode_event(event)?),
        _ => None,
    };

    let workout = raw
        .workout
        .into_iter()
        .map(|entry| decode_exercise(entry, vocabulary))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TrainingLog {
        timestamp,
        duration,
        bodyweight,
        event,
        workout,
        notes: raw.notes,
    })
}

/// Deserialize and validate a log from YAML text
pub fn decode_str(content: &str, vocabulary: &Vocabulary) -> Result<TrainingLog, DecodeError> {
    decode(RawTrainingLog::from_yaml(content)?, vocabulary)
}

fn decode_event(raw: RawEvent) -> Result<Event, EventError> {
    let wilks = raw
        .wilks
        .trim()
        .parse::<f64>()
        .map_err(|source| EventError::Wilks {
            value: raw.wilks.clone(),
            source,
        })?;
    let total = parse_weight(&raw.total).map_err(|source| EventError::Total {
        value: raw.total.clone(),
        source,
    })?;

    Ok(Event {
        name: raw.name,
        wilks,
        total,
    })
}

fn decode_exercise(raw: RawExercise, vocabulary: &Vocabulary) -> Result<Exercise, DecodeError> {
    if !vocabulary.is_valid_exercise(&raw.name) {
        return Err(DecodeError::InvalidExercise { name: raw.name });
    }

    let weight = parse_weight(&raw.weight).map_err(|source| DecodeError::ExerciseWeight {
        exercise: raw.name.clone(),
        source,
    })?;
    let sets = parse_count(&raw.name, "sets", &raw.sets)?;
    let reps = parse_count(&raw.name, "reps", &raw.reps)?;

    Ok(Exercise {
        name: raw.name,
        weight,
        sets,
        reps,
        exertion: Some(raw.exertion).filter(|e| !e.is_empty()),
    })
}

fn parse_count(exercise: &str, field: &'static str, value: &str) -> Result<u32, DecodeError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|source| DecodeError::Int {
            exercise: exercise.to_string(),
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeightError;
    use crate::types::{Weight, WeightUnit};
    use crate::vocabulary::default_vocabulary;
    use chrono::{Duration, NaiveDate};

    const VALID_LOG: &str = r#"
date: 2022-05-01
time: 9:30AM
length: 1h30m
bodyweight: 180lbs
workout:
  - name: bench press
    weight: 200lbs
    sets: "3"
    reps: "5"
  - name: low bar squats
    weight: 140 kg
    sets: 5
    reps: 5
    exertion: rpe 8
notes:
  - felt strong
  - left knee ok
"#;

    fn decode_valid(content: &str) -> TrainingLog {
        decode_str(content, default_vocabulary()).unwrap()
    }

    #[test]
    fn test_decode_valid_log() {
        let log = decode_valid(VALID_LOG);

        assert_eq!(
            log.timestamp,
            NaiveDate::from_ymd_opt(2022, 5, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );
        assert_eq!(log.duration, Duration::minutes(90));
        assert_eq!(log.bodyweight, Weight::new(180.0, WeightUnit::Lbs));
        assert!(log.event.is_none());
        assert_eq!(log.workout.len(), 2);
        assert_eq!(
            log.workout[0],
            Exercise {
                name: "bench press".into(),
                weight: Weight::new(200.0, WeightUnit::Lbs),
                sets: 3,
                reps: 5,
                exertion: None,
            }
        );
        assert_eq!(log.workout[1].weight, Weight::new(140.0, WeightUnit::Kg));
        assert_eq!(log.workout[1].exertion.as_deref(), Some("rpe 8"));
        assert_eq!(log.notes, vec!["felt strong", "left knee ok"]);
    }

    #[test]
    fn test_pm_timestamp() {
        let content = VALID_LOG.replace("9:30AM", "7:05PM");
        let log = decode_valid(&content);
        assert_eq!(log.timestamp.format("%H:%M").to_string(), "19:05");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let content = format!("{}\nmood: great\nlocation: garage\n", VALID_LOG);
        assert_eq!(decode_valid(&content).workout.len(), 2);
    }

    #[test]
    fn test_event_decoded_when_named() {
        let content = format!(
            "{}\nevent:\n  name: spring open\n  wilks: \"350.5\"\n  total: 500kg\n",
            VALID_LOG
        );
        let event = decode_valid(&content).event.unwrap();
        assert_eq!(event.name, "spring open");
        assert_eq!(event.wilks, 350.5);
        assert_eq!(event.total, Weight::new(500.0, WeightUnit::Kg));
    }

    #[test]
    fn test_unnamed_event_is_absent() {
        let content = format!("{}\nevent:\n  name: \"\"\n  wilks: bogus\n", VALID_LOG);
        assert!(decode_valid(&content).event.is_none());
    }

    #[test]
    fn test_bad_event_total() {
        let content = format!(
            "{}\nevent:\n  name: meet\n  wilks: 300\n  total: lots\n",
            VALID_LOG
        );
        let err = decode_str(&content, default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Event(EventError::Total { .. })));
    }

    #[test]
    fn test_bad_event_wilks() {
        let content = format!(
            "{}\nevent:\n  name: meet\n  wilks: high\n  total: 500kg\n",
            VALID_LOG
        );
        let err = decode_str(&content, default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Event(EventError::Wilks { .. })));
    }

    #[test]
    fn test_missing_time_fails() {
        let content = VALID_LOG.replace("time: 9:30AM\n", "");
        let err = decode_str(&content, default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Time { .. }));
    }

    #[test]
    fn test_bad_length_fails() {
        let content = VALID_LOG.replace("1h30m", "ninety");
        let err = decode_str(&content, default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Duration(_)));
    }

    #[test]
    fn test_bad_bodyweight_fails() {
        let content = VALID_LOG.replace("180lbs", "180");
        let err = decode_str(&content, default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Bodyweight { .. }));
    }

    #[test]
    fn test_invalid_exercise_fails() {
        let content = VALID_LOG.replace("name: bench press", "name: Bench Press");
        match decode_str(&content, default_vocabulary()) {
            Err(DecodeError::InvalidExercise { name }) => assert_eq!(name, "Bench Press"),
            other => panic!("Expected InvalidExercise, got {:?}", other),
        }
    }

    #[test]
    fn test_last_entry_reps_fails_whole_record() {
        let content = VALID_LOG.replace("reps: 5\n    exertion", "reps: five\n    exertion");
        match decode_str(&content, default_vocabulary()) {
            Err(DecodeError::Int {
                exercise, field, ..
            }) => {
                assert_eq!(exercise, "low bar squats");
                assert_eq!(field, "reps");
            }
            other => panic!("Expected Int error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_entry_weight_fails_whole_record() {
        let content = VALID_LOG.replace("weight: 140 kg", "weight: heavy");
        match decode_str(&content, default_vocabulary()) {
            Err(DecodeError::ExerciseWeight { exercise, source }) => {
                assert_eq!(exercise, "low bar squats");
                assert!(matches!(source, WeightError::UnknownUnit(_)));
            }
            other => panic!("Expected ExerciseWeight error, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_count_literal_fails() {
        let content = VALID_LOG.replace("sets: 5\n", "sets: 5.0\n");
        match decode_str(&content, default_vocabulary()) {
            Err(DecodeError::Int { field, value, .. }) => {
                assert_eq!(field, "sets");
                assert_eq!(value, "5.0");
            }
            other => panic!("Expected Int error, got {:?}", other),
        }

        let content = VALID_LOG.replace("reps: 5\n    exertion", "reps: 5.5\n    exertion");
        let err = decode_str(&content, default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Int { field: "reps", .. }));
    }

    #[test]
    fn test_float_event_fields_keep_fraction() {
        let content = format!(
            "{}event:\n  name: meet\n  wilks: 400.5\n  total: 500kg\n",
            VALID_LOG
        );
        let event = decode_valid(&content).event.unwrap();
        assert_eq!(event.wilks, 400.5);
    }

    #[test]
    fn test_negative_sets_fail() {
        let content = VALID_LOG.replace("sets: \"3\"", "sets: \"-3\"");
        let err = decode_str(&content, default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Int { field: "sets", .. }));
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Vocabulary::new(["bench press"]);
        let err = decode_str(VALID_LOG, &vocabulary).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidExercise { .. }));

        let vocabulary = vocabulary.with_extra(["low bar squats"]);
        assert!(decode_str(VALID_LOG, &vocabulary).is_ok());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = decode_str("date: [unclosed", default_vocabulary()).unwrap_err();
        assert!(matches!(err, DecodeError::Yaml(_)));
    }

    #[test]
    fn test_numeric_fields_reparse() {
        let log = decode_valid(VALID_LOG);
        for exercise in &log.workout {
            let weight = parse_weight(&exercise.weight.to_string()).unwrap();
            let sets: u32 = exercise.sets.to_string().parse().unwrap();
            let reps: u32 = exercise.reps.to_string().parse().unwrap();
            assert_eq!(weight, exercise.weight);
            assert_eq!(sets, exercise.sets);
            assert_eq!(reps, exercise.reps);
        }
    }
}
