//! Training log discovery and loading.
//!
//! A log root holds log files named `YYYY-MM-DD[-suffix].yml`, either
//! directly or inside four-digit year directories. Everything else is skipped.

use crate::decode::decode_str;
use crate::error::{Error, Result};
use crate::types::TrainingLog;
use crate::vocabulary::Vocabulary;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static PARTITION_DIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(19|20)\d\d$").expect("partition pattern compiles"));

static LOG_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(19|20)\d\d-(0[1-9]|1[012])(-(0[1-9]|[12]\d|3[01]).*)?\.yml$")
        .expect("log file pattern compiles")
});

/// How a directory entry takes part in loading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A year directory whose logs are merged into the parent's
    Partition,
    /// A log file to decode
    LogFile,
    Skip,
}

/// True for year directory names such as `2023`
pub fn is_partition_dir(name: &str) -> bool {
    PARTITION_DIR.is_match(name)
}

/// True for log file names such as `2023-01-14.yml` or `2023-01-14-evening.yml`
pub fn is_log_file(name: &str) -> bool {
    LOG_FILE.is_match(name)
}

pub fn classify(name: &str, is_dir: bool) -> EntryKind {
    match (is_dir, is_partition_dir(name), is_log_file(name)) {
        (true, true, _) => EntryKind::Partition,
        (false, _, true) => EntryKind::LogFile,
        _ => EntryKind::Skip,
    }
}

/// Read and decode a single log file
pub fn load_file(path: &Path, vocabulary: &Vocabulary) -> Result<TrainingLog> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let log = decode_str(&contents, vocabulary).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Decoded {:?} ({} exercises)", path, log.workout.len());
    Ok(log)
}

/// Load every log under `dir`, flattening year directories in place.
///
/// Entries are visited in name order. The first unreadable entry or
/// undecodable log aborts the whole load.
pub fn load_directory(dir: &Path, vocabulary: &Vocabulary) -> Result<Vec<TrainingLog>> {
    let mut logs = Vec::new();
    walk(dir, vocabulary, &mut logs)?;

    tracing::info!("Loaded {} training logs from {:?}", logs.len(), dir);
    Ok(logs)
}

/// Load a single log file, or every log under a directory
pub fn load_path(path: &Path, vocabulary: &Vocabulary) -> Result<Vec<TrainingLog>> {
    if path.is_dir() {
        load_directory(path, vocabulary)
    } else {
        Ok(vec![load_file(path, vocabulary)?])
    }
}

fn walk(dir: &Path, vocabulary: &Vocabulary, logs: &mut Vec<TrainingLog>) -> Result<()> {
    let load_error = |source| Error::Load {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = std::fs::read_dir(dir)
        .map_err(load_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(load_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        match classify(&name, path.is_dir()) {
            EntryKind::Partition => walk(&path, vocabulary, logs)?,
            EntryKind::LogFile => logs.push(load_file(&path, vocabulary)?),
            EntryKind::Skip => tracing::debug!("Skipping {:?}", path),
        }
    }

    Ok(())
}
