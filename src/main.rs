use clap::Parser;
use rinkbot::cli::Cli;
use rinkbot::config::{AppConfig, LoggingConfig};
use rinkbot::error::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = AppConfig::load_from(&cli.config_dir)
        .map(|config| config.logging)
        .unwrap_or_default();
    let _guard = init_logging(&logging);

    cli.run().await
}

/// Console logging on stderr (stdout carries the reports), plus a daily
/// rolling file when a log directory is configured
fn init_logging(logging: &LoggingConfig) -> Option<WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", logging.level)));

    let console_layer = if logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let mut guard = None;
    let file_layer = logging.dir.as_deref().and_then(rolling_file).map(|appender| {
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Daily rolling appender in `dir`, or `None` when the directory or its
/// first log file cannot be created. `rolling::daily` panics in that case.
fn rolling_file(dir: &str) -> Option<RollingFileAppender> {
    match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("rinkbot.log")
        .build(dir)
    {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("Warning: Could not write to log directory {dir} ({e}), file logging disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rinkbot-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_rolling_file_in_writable_dir() {
        let dir = scratch("logs");
        assert!(rolling_file(dir.to_str().unwrap()).is_some());
        assert!(dir.is_dir());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unusable_log_dir_disables_file_logging() {
        // A regular file where the directory should be
        let blocker = scratch("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        assert!(rolling_file(blocker.to_str().unwrap()).is_none());
        std::fs::remove_file(&blocker).unwrap();
    }
}
