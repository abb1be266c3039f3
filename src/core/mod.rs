pub mod cancellation;
pub mod runner;
pub mod scanner;

pub use crate::domain::model::{QueryReport, QueryStatus, ScanOutcome};
pub use crate::domain::ports::{ConfigProvider, WordCounter};
pub use crate::utils::error::Result;
