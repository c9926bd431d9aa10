//! Logging system initialization

use std::env;

/// Initialize the tracing subscriber.
///
/// Level comes from `RUST_LOG`, falling back to `info`. The returned guard
/// must be kept alive for the duration of the program so the non-blocking
/// writer gets flushed.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter = tracing_subscriber::EnvFilter::new(
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
    );

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .init();

    guard
}
