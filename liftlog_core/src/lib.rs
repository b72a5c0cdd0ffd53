#![forbid(unsafe_code)]

//! Core domain model and processing pipeline for liftlog.
//!
//! This crate provides:
//! - Weight and session length parsing
//! - The exercise vocabulary and variation groups
//! - Decoding and loading of YAML training logs
//! - Projections of a log collection into time series
//! - Metric records, sinks and CSV/JSON export

pub mod types;
pub mod error;
pub mod weight;
pub mod duration;
pub mod vocabulary;
pub mod decode;
pub mod loader;
pub mod index;
pub mod projection;
pub mod metrics;
pub mod sink;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{DecodeError, Error, Result};
pub use types::*;
pub use weight::parse_weight;
pub use duration::parse_duration;
pub use vocabulary::{default_vocabulary, ExerciseSelector, Variation, Vocabulary};
pub use decode::{decode, RawTrainingLog};
pub use loader::{load_directory, load_file, load_path};
pub use index::LogIndex;
pub use projection::Projection;
pub use metrics::{project_statistics, MetricRecord};
pub use sink::{JsonlSink, MetricSink, WriterSink};
pub use config::Config;
