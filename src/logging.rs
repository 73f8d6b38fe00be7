//! Logging utilities for the launcher
//!
//! Thin wrapper over `tracing-subscriber`: an env-filtered compact stdout
//! subscriber plus contextual helpers used at the process edges.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with the given base level
///
/// `RUST_LOG` wins when set. Forwarded child output is logged under the
/// `app` target at info and up.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("launcher={log_level},app=info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!("🚀 Starting {}", details);
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!("🛑 Shutting down: {}", reason);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!("❌ {} failed: {}", context, error);
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!("✅ {}", message);
}
