use crate::core::cancellation::CancellationToken;
use crate::domain::model::ScanOutcome;
use crate::domain::ports::WordCounter;
use crate::utils::error::{Result, WordCountError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Streams lines from a reader and counts exact matches of one word.
pub struct LineScanner;

impl LineScanner {
    /// Counts lines equal to `word` (ordinal, case-sensitive).
    ///
    /// The token is checked after each line has been compared; once it is
    /// set the scan stops and returns what it has counted so far.
    pub async fn scan_reader<R>(
        reader: R,
        word: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<ScanOutcome>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut count = 0usize;
        let mut lines_scanned = 0usize;
        let mut cancelled = false;

        while let Some(line) = lines.next_line().await? {
            lines_scanned += 1;
            if line == word {
                count += 1;
            }

            if cancel.is_some_and(CancellationToken::is_cancelled) {
                cancelled = true;
                break;
            }
        }

        Ok(ScanOutcome {
            word: word.to_string(),
            count,
            lines_scanned,
            cancelled,
        })
    }
}

/// `WordCounter` over a newline-delimited word list on disk.
///
/// Each call opens its own handle; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct FileWordCounter {
    word_list_path: PathBuf,
}

impl FileWordCounter {
    pub fn new<P: AsRef<Path>>(word_list_path: P) -> Self {
        Self {
            word_list_path: word_list_path.as_ref().to_path_buf(),
        }
    }

    pub fn word_list_path(&self) -> &Path {
        &self.word_list_path
    }
}

#[async_trait]
impl WordCounter for FileWordCounter {
    async fn count_word(
        &self,
        word: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<ScanOutcome> {
        let display_path = self.word_list_path.display().to_string();
        tracing::debug!("Scanning {} for \"{}\"", display_path, word);

        let file = File::open(&self.word_list_path)
            .await
            .map_err(|e| WordCountError::from_open(&display_path, e))?;

        let outcome = LineScanner::scan_reader(BufReader::new(file), word, cancel).await?;

        if outcome.cancelled {
            tracing::info!(
                "⏹️ Scan for \"{}\" cancelled after {} lines ({} matches so far)",
                word,
                outcome.lines_scanned,
                outcome.count
            );
        } else {
            tracing::debug!(
                "Scanned {} lines, {} matches for \"{}\"",
                outcome.lines_scanned,
                outcome.count,
                word
            );
        }

        Ok(outcome)
    }
}
