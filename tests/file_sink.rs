// tests/file_sink.rs

use std::error::Error;
use std::fs;

use chrono::{Duration, Local, TimeZone};
use tempfile::TempDir;

use pullwrap::sink::{FileLogSink, LogSink, SUMMARY_LOG_NAME, VERBOSE_LOG_NAME};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn log_dir_is_created_and_lines_are_visible_immediately() -> TestResult {
    let dir = TempDir::new()?;
    let log_dir = dir.path().join("nested").join("logs");

    let mut sink = FileLogSink::open(&log_dir)?;
    sink.write_line("PLAY [all]", None)?;
    sink.write_line("ok: [h]", Some("TASK [ping]"))?;

    // No flush or drop: each entry is already on disk.
    let verbose = fs::read_to_string(log_dir.join(VERBOSE_LOG_NAME))?;
    let lines: Vec<&str> = verbose.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("\t-\tPLAY [all]"));
    assert!(lines[1].ends_with("\tTASK [ping]\tok: [h]"));

    assert_eq!(sink.log_dir(), log_dir.as_path());

    Ok(())
}

#[test]
fn recap_goes_to_summary_log_with_both_timestamps() -> TestResult {
    let dir = TempDir::new()?;
    let start = Local
        .with_ymd_and_hms(2026, 3, 1, 4, 5, 6)
        .single()
        .ok_or("ambiguous local time")?;
    let end = start + Duration::seconds(90);

    let mut sink = FileLogSink::open(dir.path())?;
    sink.write_recap(start, end, "h : ok=3 changed=0 failed=0")?;

    let summary = fs::read_to_string(dir.path().join(SUMMARY_LOG_NAME))?;
    let fields: Vec<&str> = summary.trim_end().split('\t').collect();

    assert_eq!(fields.len(), 3);
    assert!(fields[0].starts_with("2026-03-01T04:05:06"));
    assert!(fields[1].starts_with("2026-03-01T04:06:36"));
    assert_eq!(fields[2], "h : ok=3 changed=0 failed=0");

    assert!(fs::read_to_string(dir.path().join(VERBOSE_LOG_NAME))?.is_empty());

    Ok(())
}

#[test]
fn reopening_appends_instead_of_truncating() -> TestResult {
    let dir = TempDir::new()?;

    {
        let mut sink = FileLogSink::open(dir.path())?;
        sink.write_line("first run", None)?;
    }
    {
        let mut sink = FileLogSink::open(dir.path())?;
        sink.write_line("second run", None)?;
    }

    let verbose = fs::read_to_string(dir.path().join(VERBOSE_LOG_NAME))?;
    assert_eq!(verbose.lines().count(), 2);
    assert!(verbose.contains("first run"));
    assert!(verbose.contains("second run"));

    Ok(())
}
