//! Append-only CSV snapshot log

use crate::model::ProjectionResult;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Timestamp layout used in the log
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot persistence errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Snapshot writer lock poisoned")]
    Poisoned,
}

/// One flat row of the snapshot log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub quarter: u32,
    pub time_remaining: String,
    pub total_points_so_far: f64,
    pub live_market_total: f64,
    pub pregame_total: f64,
    pub elapsed_minutes: f64,
    pub alpha_used: f64,
    pub pace_per_minute: f64,
    pub pace_only_projection: f64,
    pub blended_projection: f64,
    pub edge_vs_live: f64,
    pub needed_pace_per_minute: f64,
    pub lean: String,
    pub flags: String,
    pub timestamp: String,
}

impl From<&ProjectionResult> for SnapshotRecord {
    fn from(r: &ProjectionResult) -> Self {
        Self {
            quarter: r.quarter,
            time_remaining: r.time_remaining.clone(),
            total_points_so_far: r.total_points_so_far,
            live_market_total: r.live_market_total,
            pregame_total: r.pregame_total,
            elapsed_minutes: r.elapsed_minutes,
            alpha_used: r.alpha_used,
            pace_per_minute: r.pace_per_minute,
            pace_only_projection: r.pace_only_projection,
            blended_projection: r.blended_projection,
            edge_vs_live: r.edge_vs_live,
            needed_pace_per_minute: r.needed_pace_per_minute,
            lean: r.lean.to_string(),
            flags: r.flags.to_string(),
            timestamp: r.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Destination for computed projections
pub trait SnapshotSink: Send + Sync {
    /// Append one projection as a single record
    fn append(&self, result: &ProjectionResult) -> Result<(), SnapshotError>;
}

/// CSV file sink; the header row is written when the file is new or empty
pub struct CsvSnapshotWriter {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvSnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record back, oldest first
    pub fn read_all(&self) -> Result<Vec<SnapshotRecord>, SnapshotError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader
            .deserialize()
            .collect::<Result<Vec<SnapshotRecord>, csv::Error>>()?;
        Ok(records)
    }
}

impl SnapshotSink for CsvSnapshotWriter {
    fn append(&self, result: &ProjectionResult) -> Result<(), SnapshotError> {
        let _guard = self.lock.lock().map_err(|_| SnapshotError::Poisoned)?;

        let needs_header = std::fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(SnapshotRecord::from(result))?;
        writer.flush()?;

        tracing::debug!(path = ?self.path, header = needs_header, "Appended snapshot");
        Ok(())
    }
}
