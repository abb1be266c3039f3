use serde::{Deserialize, Serialize};

/// Outcome of scanning a word list for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub word: String,
    pub count: usize,
    pub lines_scanned: usize,
    /// True when the scan stopped on a cancellation request before end of input.
    pub cancelled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum QueryStatus {
    Complete,
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    pub word: String,
    pub count: usize,
    pub lines_scanned: usize,
    pub status: QueryStatus,
}

impl QueryReport {
    pub fn failed(word: &str, message: String) -> Self {
        Self {
            word: word.to_string(),
            count: 0,
            lines_scanned: 0,
            status: QueryStatus::Failed(message),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, QueryStatus::Failed(_))
    }

    /// `word - "<word>" - count - <n>`
    pub fn console_line(&self) -> String {
        format!("word - \"{}\" - count - {}", self.word, self.count)
    }
}

impl From<ScanOutcome> for QueryReport {
    fn from(outcome: ScanOutcome) -> Self {
        let status = if outcome.cancelled {
            QueryStatus::Cancelled
        } else {
            QueryStatus::Complete
        };
        Self {
            word: outcome.word,
            count: outcome.count,
            lines_scanned: outcome.lines_scanned,
            status,
        }
    }
}
