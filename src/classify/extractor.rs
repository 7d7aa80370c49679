// src/classify/extractor.rs

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::RunningProcess;
use crate::sink::LogSink;

use super::state::ClassificationState;

/// Start/end timestamps of a run and its recap line, if one was printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub recap_line: Option<String>,
}

/// Drives a [`ClassificationState`] over a line stream and forwards the
/// resulting events to a [`LogSink`].
#[derive(Debug, Default)]
pub struct Classifier {
    state: ClassificationState,
    lines_seen: u64,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Log `line` with the task context that was current before it, then
    /// update the state.
    pub fn observe(&mut self, line: &str, sink: &mut dyn LogSink) -> Result<()> {
        sink.write_line(line, self.state.current_task())?;
        self.state.advance(line);
        self.lines_seen += 1;
        Ok(())
    }

    /// Close the run. Emits the recap event when a recap line was captured.
    pub fn finish(
        self,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        sink: &mut dyn LogSink,
    ) -> Result<RunSummary> {
        if self.state.is_capturing_recap() {
            debug!("output ended right after the recap marker");
        }

        let recap_line = self.state.into_recap_line();

        match &recap_line {
            Some(recap) => {
                info!(recap = %recap, lines = self.lines_seen, "pull finished");
                sink.write_recap(start_time, end_time, recap)?;
            }
            None => {
                warn!(lines = self.lines_seen, "pull output contained no recap line");
            }
        }

        Ok(RunSummary {
            start_time,
            end_time,
            recap_line,
        })
    }
}

/// Consume a process's whole output stream.
///
/// Every line reaches the sink in arrival order. The recap event, if any,
/// is written after the stream has ended, with `end_time` taken at that
/// point. A read error aborts immediately.
pub async fn consume(
    process: &mut dyn RunningProcess,
    sink: &mut dyn LogSink,
    start_time: DateTime<Local>,
) -> Result<RunSummary> {
    let mut classifier = Classifier::new();

    while let Some(line) = process.next_line().await? {
        classifier.observe(&line, sink)?;
    }

    let end_time = Local::now();
    classifier.finish(start_time, end_time, sink)
}

/// Run the classifier over an already recorded sequence of lines.
pub fn classify_lines<I, S>(
    lines: I,
    sink: &mut dyn LogSink,
    start_time: DateTime<Local>,
    end_time: DateTime<Local>,
) -> Result<RunSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classifier = Classifier::new();
    for line in lines {
        classifier.observe(line.as_ref(), sink)?;
    }
    classifier.finish(start_time, end_time, sink)
}
