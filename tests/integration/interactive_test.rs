//! Interactive loop over in-memory I/O

use nba_live_total::cli::InteractiveSession;
use nba_live_total::config::Config;
use nba_live_total::data::CsvSnapshotWriter;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_session_projects_hedges_and_saves() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.snapshots.path = dir.path().join("snapshots.csv");
    let sink = CsvSnapshotWriter::new(&config.snapshots.path);

    // One full cycle with the bonus on, an under hedge, a saved snapshot, then quit
    let script = "3\n6:00\n150\n222\n\n\n\ny\nn\n\n\nn\n\
                  y\nunder\n228.5\n100\n-110\n\n-110\ny\nq\n";
    let mut out = Vec::new();
    let stats = InteractiveSession::new(Cursor::new(script), &mut out, config, &sink)
        .run()
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(stats.projections, 1);
    assert_eq!(stats.hedges, 1);
    assert_eq!(stats.snapshots_saved, 1);
    assert!(out.contains("Flags: BONUS_WHISTLES_ON"));
    // Blank hedge line falls back to the live total of 222
    assert!(out.contains("Middle range (both win): 222.0 to 228.5"));
    // clv 6.5 with one cautionary flag only
    assert!(out.contains("Suggestion: Hold (good CLV) (HOLD)"));

    let records = sink.read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].flags, "BONUS_WHISTLES_ON");
    assert_eq!(records[0].live_market_total, 222.0);
}

#[test]
fn test_bad_clock_reports_error_and_continues() {
    let dir = TempDir::new().unwrap();
    let sink = CsvSnapshotWriter::new(dir.path().join("snapshots.csv"));

    let script = "2\n-0:30\n60\n224\n\n\n\nn\nn\n\n\nn\nq\n";
    let mut out = Vec::new();
    let stats = InteractiveSession::new(Cursor::new(script), &mut out, Config::default(), &sink)
        .run()
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(stats.errors, 1);
    assert_eq!(stats.projections, 0);
    assert!(out.contains("Error: Format error"));
    assert!(sink.read_all().unwrap().is_empty());
}
