use crate::core::cancellation::CancellationToken;
use crate::domain::model::ScanOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WordCounter: Send + Sync {
    async fn count_word(
        &self,
        word: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<ScanOutcome>;

    /// Same scan, but a read failure is logged and reported as zero matches.
    async fn count_word_or_zero(&self, word: &str, cancel: Option<&CancellationToken>) -> usize {
        match self.count_word(word, cancel).await {
            Ok(outcome) => outcome.count,
            Err(e) => {
                tracing::warn!("⚠️ Counting \"{}\" failed, reporting 0: {}", word, e);
                0
            }
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn word_list_path(&self) -> &str;
    fn words(&self) -> &[String];
    fn cancel_after_ms(&self) -> Option<u64>;
    fn output_format(&self) -> &str;
}
