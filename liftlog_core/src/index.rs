//! Lookup of training logs by day.

use crate::error::{Error, Result};
use crate::types::TrainingLog;
use std::collections::BTreeMap;

/// Logs keyed by their `YYYY-MM-DD` date.
///
/// When several logs share a day, the last one in collection order wins.
#[derive(Debug, Default)]
pub struct LogIndex<'a> {
    by_date: BTreeMap<String, &'a TrainingLog>,
}

impl<'a> LogIndex<'a> {
    pub fn new(logs: &'a [TrainingLog]) -> Self {
        let mut by_date = BTreeMap::new();
        for log in logs {
            if by_date.insert(log.simple_date(), log).is_some() {
                tracing::debug!("Multiple logs on {}, keeping the last", log.simple_date());
            }
        }
        Self { by_date }
    }

    pub fn get(&self, date: &str) -> Option<&'a TrainingLog> {
        self.by_date.get(date).copied()
    }

    /// Like `get`, but a missing day is an `Error::NotFound`
    pub fn require(&self, date: &str) -> Result<&'a TrainingLog> {
        self.get(date)
            .ok_or_else(|| Error::NotFound(date.to_string()))
    }

    /// Indexed dates in ascending order
    pub fn dates(&self) -> Vec<&str> {
        self.by_date.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
