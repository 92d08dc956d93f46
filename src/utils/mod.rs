//! Shared helpers: logging setup, lock handling and validation

pub mod lock;
pub mod logging;
pub mod validation;

// Re-export commonly used items
pub use lock::{with_read_lock, with_write_lock};
#[cfg(feature = "json-logging")]
pub use logging::init_json_logging;
pub use logging::{init_logging, init_logging_from_config};
pub use validation::{ensure_fmt, ensure_not_blank, ensure_not_empty};
