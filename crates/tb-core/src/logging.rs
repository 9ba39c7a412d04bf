//! Structured logging setup.

use tb_config::LoggingConfig;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr, as JSON lines when `json` is set.
pub fn init_logging(logging: &LoggingConfig) {
    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(build_subscriber(logging));
}

/// Subscriber described by `logging`, without installing it.
pub fn build_subscriber(logging: &LoggingConfig) -> Box<dyn Subscriber + Send + Sync> {
    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    if logging.json {
        Box::new(builder.json().with_current_span(false).finish())
    } else {
        Box::new(builder.finish())
    }
}
