//! Snapshot persistence
//!
//! Stores computed projections to an append-only CSV log

mod snapshot;

pub use snapshot::{CsvSnapshotWriter, SnapshotError, SnapshotRecord, SnapshotSink, TIMESTAMP_FORMAT};
