use clap::Parser;
use std::time::Duration;
use word_count::core::runner::render_reports;
use word_count::core::ConfigProvider;
use word_count::utils::error::{ErrorSeverity, WordCountError};
use word_count::utils::{logger, validation::Validate};
use word_count::{CliConfig, FileWordCounter, QueryRunner};

fn exit_with(e: &WordCountError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    tracing::info!("📁 Word list: {}", settings.word_list_path());

    let counter = FileWordCounter::new(settings.word_list_path());
    let runner = QueryRunner::new_with_monitoring(counter, settings.monitoring);
    let deadline = settings.cancel_after_ms().map(Duration::from_millis);

    let reports = runner.run(settings.words(), deadline).await;

    match render_reports(&reports, settings.output_format()) {
        Ok(output) => println!("{}", output),
        Err(e) => exit_with(&e),
    }

    let failed = reports.iter().filter(|r| r.is_failed()).count();
    if failed > 0 {
        tracing::warn!("⚠️ {} of {} queries could not read the word list", failed, reports.len());
        if cli.strict {
            std::process::exit(2);
        }
    }

    Ok(())
}
