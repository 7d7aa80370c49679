use chrono::{DateTime, Local};
use pullwrap::errors::Result;
use pullwrap::sink::LogSink;

/// A line event as the sink saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEvent {
    pub line: String,
    pub task: Option<String>,
}

/// A recap event as the sink saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecapEvent {
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub recap_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Line(LineEvent),
    Recap(RecapEvent),
}

/// Sink that keeps every event in memory, in call order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<SinkEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&LineEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Line(l) => Some(l),
                SinkEvent::Recap(_) => None,
            })
            .collect()
    }

    pub fn recaps(&self) -> Vec<&RecapEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Recap(r) => Some(r),
                SinkEvent::Line(_) => None,
            })
            .collect()
    }

    /// Just the line texts, in order.
    pub fn line_texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.line.clone()).collect()
    }
}

impl LogSink for MemorySink {
    fn write_line(&mut self, line: &str, task: Option<&str>) -> Result<()> {
        self.events.push(SinkEvent::Line(LineEvent {
            line: line.to_string(),
            task: task.map(str::to_string),
        }));
        Ok(())
    }

    fn write_recap(
        &mut self,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        recap_line: &str,
    ) -> Result<()> {
        self.events.push(SinkEvent::Recap(RecapEvent {
            start_time,
            end_time,
            recap_line: recap_line.to_string(),
        }));
        Ok(())
    }
}
