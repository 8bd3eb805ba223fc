// Interactive session state: transcript of runs and input history

use crate::pipeline::RunOutcome;
use std::collections::VecDeque;

/// Lines kept in a transcript; the oldest are dropped first.
pub const MAX_TRANSCRIPT_LINES: usize = 1000;

/// What a transcript line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Value,
    Error,
}

/// A line of transcript output with the run it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
    pub kind: LineKind,
    pub run: usize,
}

/// Ordered record of recent input lines and what they produced
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub lines: VecDeque<TranscriptLine>,
    runs: usize,
    successes: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the input and report lines of one run.
    pub fn record(&mut self, outcome: &RunOutcome) {
        let run = self.runs;
        self.runs += 1;

        self.push_line(TranscriptLine {
            text: outcome.source.clone(),
            kind: LineKind::Input,
            run,
        });

        let kind = if outcome.is_success() {
            self.successes += 1;
            LineKind::Value
        } else {
            LineKind::Error
        };
        for text in outcome.report() {
            self.push_line(TranscriptLine { text, kind, run });
        }
    }

    fn push_line(&mut self, line: TranscriptLine) {
        if self.lines.len() == MAX_TRANSCRIPT_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Number of runs recorded so far
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Number of runs that produced a value
    pub fn successes(&self) -> usize {
        self.successes
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Previously submitted inputs, recalled newest first.
#[derive(Debug, Clone, Default)]
pub struct InputHistory {
    entries: Vec<String>,
    /// Index into `entries` while browsing; `None` when editing a fresh line.
    cursor: Option<usize>,
}

impl InputHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a submitted line; consecutive duplicates are stored once.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        if line.trim().is_empty() || self.entries.last().is_some_and(|last| last == line) {
            return;
        }
        self.entries.push(line.to_string());
    }

    /// Step back to an older entry.
    pub fn older(&mut self) -> Option<&str> {
        let index = match self.cursor {
            None => self.entries.len().checked_sub(1)?,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step forward to a newer entry; `None` once past the newest.
    pub fn newer(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run;

    #[test]
    fn test_transcript_records_input_and_report() {
        let mut transcript = Transcript::new();
        transcript.record(&run("1 + 1"));
        transcript.record(&run("1 / 0"));

        assert_eq!(transcript.runs(), 2);
        assert_eq!(transcript.successes(), 1);
        let texts: Vec<&str> = transcript.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["1 + 1", "2", "1 / 0", "ERROR: Division by zero at position 2"]
        );
        assert_eq!(transcript.lines[3].kind, LineKind::Error);
        assert_eq!(transcript.lines[3].run, 1);
    }

    #[test]
    fn test_transcript_keeps_only_recent_lines() {
        let mut transcript = Transcript::new();
        let outcome = run("1 + 1");
        for _ in 0..MAX_TRANSCRIPT_LINES {
            transcript.record(&outcome);
        }
        transcript.record(&run("2 * 3"));

        assert_eq!(transcript.lines.len(), MAX_TRANSCRIPT_LINES);
        assert_eq!(transcript.runs(), MAX_TRANSCRIPT_LINES + 1);
        assert_eq!(transcript.successes(), MAX_TRANSCRIPT_LINES + 1);
        assert_eq!(transcript.lines.back().map(|l| l.text.as_str()), Some("6"));
        assert_eq!(
            transcript.lines.front().map(|l| l.run),
            Some(MAX_TRANSCRIPT_LINES / 2 + 1)
        );
    }

    #[test]
    fn test_history_browsing() {
        let mut history = InputHistory::new();
        history.push("1");
        history.push("2");
        history.push("2");
        history.push("  ");
        assert_eq!(history.len(), 2);

        assert_eq!(history.older(), Some("2"));
        assert_eq!(history.older(), Some("1"));
        assert_eq!(history.older(), Some("1"));
        assert_eq!(history.newer(), Some("2"));
        assert_eq!(history.newer(), None);
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn test_empty_history() {
        let mut history = InputHistory::new();
        assert_eq!(history.older(), None);
        assert_eq!(history.newer(), None);
    }
}
