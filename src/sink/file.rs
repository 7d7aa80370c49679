// src/sink/file.rs

use std::fs::{self, File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local, SecondsFormat};
use tracing::{debug, info};

use crate::errors::Result;

use super::LogSink;

/// Verbose, one-entry-per-output-line log.
pub const VERBOSE_LOG_NAME: &str = "pull.log";

/// Condensed log with one entry per run that printed a recap.
pub const SUMMARY_LOG_NAME: &str = "summary.log";

/// Appends output lines to `<log_dir>/pull.log` and recaps to
/// `<log_dir>/summary.log`.
///
/// Both files are wrapped in a `LineWriter`, so every entry is flushed by
/// the time the write call returns. Each line is also mirrored as a
/// `debug!` event.
#[derive(Debug)]
pub struct FileLogSink {
    log_dir: PathBuf,
    verbose: LineWriter<File>,
    summary: LineWriter<File>,
}

impl FileLogSink {
    /// Create `log_dir` if needed and open both logs for appending.
    pub fn open(log_dir: impl AsRef<Path>) -> Result<Self> {
        let log_dir = log_dir.as_ref().to_path_buf();
        fs::create_dir_all(&log_dir)
            .with_context(|| format!("creating log directory {:?}", log_dir))?;

        let verbose = open_append(&log_dir.join(VERBOSE_LOG_NAME))?;
        let summary = open_append(&log_dir.join(SUMMARY_LOG_NAME))?;

        debug!(log_dir = ?log_dir, "opened log files");

        Ok(Self {
            log_dir,
            verbose: LineWriter::new(verbose),
            summary: LineWriter::new(summary),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn open_append(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {:?}", path))?;
    Ok(file)
}

fn timestamp(at: DateTime<Local>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

impl LogSink for FileLogSink {
    fn write_line(&mut self, line: &str, task: Option<&str>) -> Result<()> {
        debug!(task = task.unwrap_or("-"), "{}", line);

        writeln!(
            self.verbose,
            "{}\t{}\t{}",
            timestamp(Local::now()),
            task.unwrap_or("-"),
            line
        )?;
        Ok(())
    }

    fn write_recap(
        &mut self,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        recap_line: &str,
    ) -> Result<()> {
        info!(
            start = %timestamp(start_time),
            end = %timestamp(end_time),
            "recording run summary"
        );

        writeln!(
            self.summary,
            "{}\t{}\t{}",
            timestamp(start_time),
            timestamp(end_time),
            recap_line
        )?;
        Ok(())
    }
}
