//! Core domain types for liftlog.
//!
//! This module defines the decoded, validated model:
//! - Weights and their units
//! - Exercises, events and whole training logs
//! - Data points, the output unit of every projection

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference format of the `date` + `time` fields of a log, e.g. `2022-05-01 9:30AM`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M%p";

/// Format used when only the day of a log is displayed or exported
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Weight Types
// ============================================================================

/// Canonical weight unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weight value and its unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }
}

/// Formats as `"<value> <unit>"`, which `parse_weight` reads back unchanged.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

// ============================================================================
// Training Log Types
// ============================================================================

/// A single validated workout entry
#[derive(Clone, Debug, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub weight: Weight,
    pub sets: u32,
    pub reps: u32,
    pub exertion: Option<String>,
}

/// A special training day such as a meet or a mock meet
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub name: String,
    pub wilks: f64,
    pub total: Weight,
}

/// One decoded training session.
///
/// A log is identified by its timestamp, but a collection may hold
/// several logs with the same timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingLog {
    pub timestamp: NaiveDateTime,
    pub duration: Duration,
    pub bodyweight: Weight,
    pub event: Option<Event>,
    pub workout: Vec<Exercise>,
    pub notes: Vec<String>,
}

impl TrainingLog {
    /// The day of the session as `YYYY-MM-DD`
    pub fn simple_date(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }
}

// ============================================================================
// Projection Output
// ============================================================================

/// One point of a derived time series
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
    pub unit: Option<String>,
}

impl DataPoint {
    pub fn new(timestamp: NaiveDateTime, value: f64, unit: Option<String>) -> Self {
        Self {
            timestamp,
            value,
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::new(180.0, WeightUnit::Lbs).to_string(), "180 lbs");
        assert_eq!(Weight::new(68.5, WeightUnit::Kg).to_string(), "68.5 kg");
    }

    #[test]
    fn test_simple_date() {
        let log = TrainingLog {
            timestamp: NaiveDate::from_ymd_opt(2022, 5, 1)
                .unwrap()
                .and_hms_opt(21, 15, 0)
                .unwrap(),
            duration: Duration::minutes(45),
            bodyweight: Weight::new(80.0, WeightUnit::Kg),
            event: None,
            workout: vec![],
            notes: vec![],
        };
        assert_eq!(log.simple_date(), "2022-05-01");
    }
}
