use anyhow::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use nexa::chat::{LineEditor, ThreadSleep, ViewController};
use nexa::config::{LoggingConfig, Settings};

/// Sets up the tracing subscriber.
///
/// Logs go to a daily rolling file when a log directory is configured and to
/// stderr otherwise, keeping stdout for the screens. The returned guard must
/// live until the program ends so buffered lines get flushed.
fn init_logging(logging: &LoggingConfig) -> WorkerGuard {
    let (non_blocking, guard) = match &logging.directory {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::RollingFileAppender::new(
                tracing_appender::rolling::Rotation::DAILY,
                dir,
                "nexa",
            );
            tracing_appender::non_blocking(file_appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        // Disable ANSI colors for cleaner log files
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .init();

    guard
}

/// Main entry point for the NEXA console client
///
/// Loads settings, starts logging and hands the terminal to the view
/// controller. Returns once the user exits or standard input closes.
fn main() -> Result<()> {
    let settings = Settings::new()?;
    let _guard = init_logging(&settings.logging);

    info!("NEXA starting up...");
    if let Some(dir) = &settings.logging.directory {
        info!("Log directory: {}", dir.display());
    }
    info!("Settings loaded: {:?}", settings.delays);

    let console = LineEditor::new()?;
    let mut controller = ViewController::new(console, ThreadSleep, settings.delays.timings());
    controller.run()?;

    Ok(())
}
