use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber: one layer to stdout and one to
/// a daily-rotated file under `logs/`.
///
/// `RUST_LOG` overrides the filter; without it everything logs at `info`
/// and the catalog crates at `debug`.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "catalog.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The appender stops flushing once its guard drops; leak it since
    // logging must outlive everything anyway.
    std::mem::forget(guard);
}
