// src/classify/state.rs

/// Prefix of the line the pull command prints before each task's output.
pub const TASK_MARKER: &str = "TASK";

/// Prefix of the header line that precedes the one-line run recap.
pub const RECAP_MARKER: &str = "PLAY RECAP";

/// Per-run state threaded through the line loop.
///
/// Two logical states exist: normal, and awaiting the recap line (the line
/// right after a recap marker). `capturing_recap` is the flag for the
/// latter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationState {
    current_task: Option<String>,
    capturing_recap: bool,
    recap_line: Option<String>,
}

impl ClassificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent task line seen so far.
    pub fn current_task(&self) -> Option<&str> {
        self.current_task.as_deref()
    }

    pub fn is_capturing_recap(&self) -> bool {
        self.capturing_recap
    }

    /// Line captured after the most recent recap marker, if any.
    pub fn recap_line(&self) -> Option<&str> {
        self.recap_line.as_deref()
    }

    /// Apply one line of output.
    ///
    /// A captured line is still checked against both markers afterwards, so
    /// a marker directly after a marker re-arms the capture and the final
    /// recap comes from the last marker.
    pub fn advance(&mut self, line: &str) {
        if self.capturing_recap {
            self.recap_line = Some(line.to_owned());
            self.capturing_recap = false;
        }

        if line.starts_with(TASK_MARKER) {
            self.current_task = Some(line.to_owned());
        }

        if line.starts_with(RECAP_MARKER) {
            self.capturing_recap = true;
        }
    }

    pub fn into_recap_line(self) -> Option<String> {
        self.recap_line
    }
}
