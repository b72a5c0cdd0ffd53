//! Error types for the liftlog_core library.

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No training log is recorded on the requested day
    #[error("No training log on {0}")]
    NotFound(String),

    /// A directory or file could not be read while loading logs
    #[error("error reading {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A training log file failed to decode
    #[error("error decoding {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Failure to parse a weight string such as `"315lbs"` or `"68.5 kg"`
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    /// Carries the offending unit token, or the whole input when no unit was found
    #[error("unknown unit in {0:?}")]
    UnknownUnit(String),

    #[error("invalid number in weight {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Failure to parse a session length such as `"1h30m"`
#[derive(Debug, thiserror::Error)]
#[error("invalid duration {input:?}: {reason}")]
pub struct DurationError {
    pub input: String,
    pub reason: String,
}

impl DurationError {
    pub(crate) fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure inside the optional event block of a log
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("invalid event wilks {value:?}: {source}")]
    Wilks {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid event total {value:?}: {source}")]
    Total {
        value: String,
        #[source]
        source: WeightError,
    },
}

/// First failing field of a raw training log record.
///
/// Decoding stops at the first error, so a record never yields a partial log.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed record: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid date/time {input:?}: {source}")]
    Time {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error("invalid bodyweight {input:?}: {source}")]
    Bodyweight {
        input: String,
        #[source]
        source: WeightError,
    },

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("invalid exercise {name:?}")]
    InvalidExercise { name: String },

    #[error("invalid weight for {exercise:?}: {source}")]
    ExerciseWeight {
        exercise: String,
        #[source]
        source: WeightError,
    },

    #[error("invalid {field} {value:?} for {exercise:?}: {source}")]
    Int {
        exercise: String,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
