//! Logging initialization and configuration.
//!
//! Diagnostics go to stderr so that stdout only carries command output and
//! can be piped. Nothing is shown unless asked for.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show scan statistics and request details
//! - `RUST_LOG=info` - Show pipeline progress
//! - `RUST_LOG=warn` - Show warnings and errors only (default)

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// The returned guard flushes the non-blocking writer when dropped; keep it
/// alive until the program exits.
pub fn init_logging() -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let stderr_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_line_number(true);

    // Default to "warn" level if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    tracing::debug!("Logging initialized");
    guard
}
