//! Snapshot log integration tests

use nba_live_total::data::{CsvSnapshotWriter, SnapshotSink};
use nba_live_total::model::{project, ProjectionInput, ProjectionOptions, RiskFlags};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_appends_from_many_threads() {
    let dir = TempDir::new().unwrap();
    let writer = Arc::new(CsvSnapshotWriter::new(dir.path().join("log.csv")));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let writer = Arc::clone(&writer);
            std::thread::spawn(move || {
                let input = ProjectionInput::new(2, "5:00", 90.0 + f64::from(i), 224.0, 228.5);
                writer.append(&project(&input).unwrap()).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = writer.read_all().unwrap();
    assert_eq!(records.len(), 8);
    let content = std::fs::read_to_string(writer.path()).unwrap();
    assert_eq!(content.lines().count(), 9);
}

#[test]
fn test_flags_survive_persistence() {
    let dir = TempDir::new().unwrap();
    let writer = CsvSnapshotWriter::new(dir.path().join("log.csv"));
    let input = ProjectionInput::new(3, "2:00", 170.0, 226.0, 228.5).with_options(
        ProjectionOptions {
            three_point_pct: Some(0.30),
            free_throw_attempts: Some(30.0),
            ..Default::default()
        },
    );
    let result = project(&input).unwrap();
    writer.append(&result).unwrap();

    let records = writer.read_all().unwrap();
    let labels = RiskFlags::parse_labels(&records[0].flags);
    assert_eq!(labels, result.flags.labels());
    assert_eq!(labels, vec!["ELEVATED_FT_RATE(0.88/min)", "3P_COLD(30.0%)"]);
}
