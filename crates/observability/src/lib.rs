//! Process-wide logging setup for catalog binaries.
//!
//! Libraries only emit `tracing` events; installing a subscriber is left to
//! the binary through [`init`].

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize logging using `BIBLIO_LOG_FORMAT` and `RUST_LOG`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
