//! Logging initialization for tools and embedding applications
//!
//! The library itself only emits `tracing` events; installing a subscriber is up to the
//! binary. These helpers give the bundled tools a consistent setup that:
//! - Respects RUST_LOG environment variable
//! - Allows configuration via config file
//!
//! # Usage
//! ```rust,no_run
//! use ivy_module_metadata::utils::init_logging;
//!
//! init_logging(None); // Uses RUST_LOG or defaults to "info"
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Pick the active filter: RUST_LOG first, then the configured filter, then "info"
fn resolve_filter(filter: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(filter.unwrap_or("info"))
}

/// Initialize human-readable logging to stderr
///
/// # Arguments
/// * `filter` - Optional log filter from config (e.g., "debug", "ivy_module_metadata=trace").
///   RUST_LOG takes precedence when set.
pub fn init_logging(filter: Option<&str>) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(resolve_filter(filter))
        .init();
}

/// Initialize logging with JSON output (for log aggregation)
#[cfg(feature = "json-logging")]
pub fn init_json_logging(filter: Option<&str>) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(resolve_filter(filter))
        .init();
}

/// Initialize logging from a [`LoggingConfig`]
///
/// Falls back to plain text output when JSON is requested without the
/// `json-logging` feature.
pub fn init_logging_from_config(config: Option<&LoggingConfig>) {
    let filter = config.and_then(|c| c.filter.as_deref());

    if config.map(|c| c.json_format).unwrap_or(false) {
        #[cfg(feature = "json-logging")]
        {
            init_json_logging(filter);
        }
        #[cfg(not(feature = "json-logging"))]
        {
            init_logging(filter);
        }
    } else {
        init_logging(filter);
    }
}
