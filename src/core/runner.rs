use crate::core::cancellation::CancellationToken;
use crate::domain::model::QueryReport;
use crate::domain::ports::WordCounter;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::Duration;

/// Built-in queries used when the caller supplies no words.
pub const SAMPLE_WORDS: [&str; 8] = ["2", "AAA", "word", "make", "swim", "magic", "tempo", "storm"];

/// Runs word queries one after another against a `WordCounter`.
pub struct QueryRunner<W: WordCounter> {
    counter: W,
    monitor: SystemMonitor,
}

impl<W: WordCounter> QueryRunner<W> {
    pub fn new(counter: W) -> Self {
        Self::new_with_monitoring(counter, false)
    }

    pub fn new_with_monitoring(counter: W, monitor_enabled: bool) -> Self {
        Self {
            counter,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run_word(&self, word: &str, cancel: Option<&CancellationToken>) -> QueryReport {
        let report = match self.counter.count_word(word, cancel).await {
            Ok(outcome) => QueryReport::from(outcome),
            Err(e) => {
                tracing::warn!("⚠️ Query for \"{}\" failed: {}", word, e);
                tracing::warn!("💡 {}", e.recovery_suggestion());
                QueryReport::failed(word, e.user_friendly_message())
            }
        };

        if self.monitor.is_enabled() {
            self.monitor.log_stats(&format!("query \"{}\"", word));
        }
        report
    }

    /// Starts a query and cancels it once `delay` has elapsed.
    pub async fn run_with_deadline(&self, word: &str, delay: Duration) -> QueryReport {
        let token = CancellationToken::new();
        let deadline = token.cancel_after(delay);
        let report = self.run_word(word, Some(&token)).await;
        deadline.abort();
        report
    }

    /// Runs every word sequentially, optionally under a per-query deadline.
    pub async fn run(&self, words: &[String], deadline: Option<Duration>) -> Vec<QueryReport> {
        tracing::info!("Running {} queries", words.len());

        let mut reports = Vec::with_capacity(words.len());
        for word in words {
            let report = match deadline {
                Some(delay) => self.run_with_deadline(word, delay).await,
                None => self.run_word(word, None).await,
            };
            reports.push(report);
        }

        self.monitor.log_final_stats();
        reports
    }
}

/// Renders reports as console lines (`text`) or a JSON array (`json`).
pub fn render_reports(reports: &[QueryReport], format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(reports)?),
        _ => Ok(reports
            .iter()
            .map(QueryReport::console_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
