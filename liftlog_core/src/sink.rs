//! Metric sinks.
//!
//! Records are appended to a JSONL (JSON Lines) file with file locking
//! so concurrent projector runs do not interleave lines.

use crate::metrics::MetricRecord;
use crate::Result;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Destination for emitted metric records
pub trait MetricSink {
    fn append(&mut self, records: &[MetricRecord]) -> Result<()>;
}

/// JSONL-based metric sink with file locking
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl MetricSink for JsonlSink {
    fn append(&mut self, records: &[MetricRecord]) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        for record in records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!("Appended {} metric records to {:?}", records.len(), self.path);
        Ok(())
    }
}

/// Sink writing JSON lines to any writer, e.g. stdout
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MetricSink for WriterSink<W> {
    fn append(&mut self, records: &[MetricRecord]) -> Result<()> {
        for record in records {
            serde_json::to_writer(&mut self.writer, record)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Read all records from a JSONL sink file
pub fn read_records(path: &Path) -> Result<Vec<MetricRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str::<MetricRecord>(&line)?);
    }

    file.unlock()?;
    tracing::debug!("Read {} metric records from {:?}", records.len(), path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricTags;
    use chrono::NaiveDate;

    fn record(series: &str, value: f64) -> MetricRecord {
        MetricRecord {
            series: series.into(),
            tags: MetricTags {
                username: "jo".into(),
                unit: "kg".into(),
            },
            value,
            timestamp: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_append_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("metrics/records.jsonl");

        let mut sink = JsonlSink::new(&path);
        sink.append(&[record("bench_press_intensity", 100.0)]).unwrap();
        sink.append(&[
            record("bench_press_tonnage", 1500.0),
            record("bodyweight", 80.0),
        ])
        .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], record("bench_press_intensity", 100.0));
        assert_eq!(records[2].series, "bodyweight");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let records = read_records(&temp_dir.path().join("missing.jsonl")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new());
        sink.append(&[record("a", 1.0), record("b", 2.0)]).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.starts_with("{\"series\":\"a\""));
    }
}
