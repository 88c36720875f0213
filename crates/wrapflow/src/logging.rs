//! Logging setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a `fmt` subscriber on stderr filtered by `RUST_LOG`.
///
/// Returns false when a global subscriber was already installed.
pub fn init_logging() -> bool {
    init_logging_with(DEFAULT_DIRECTIVE)
}

/// [`init_logging`] with an explicit fallback directive.
pub fn init_logging_with(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
