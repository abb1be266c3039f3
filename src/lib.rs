pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::Settings;
pub use crate::core::{
    cancellation::CancellationToken,
    runner::QueryRunner,
    scanner::{FileWordCounter, LineScanner},
};
pub use domain::model::{QueryReport, QueryStatus, ScanOutcome};
pub use domain::ports::WordCounter;
pub use utils::error::{Result, WordCountError};
