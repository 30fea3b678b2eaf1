//! Tracing and logging setup shared by anything that drives an inventory.
//!
//! Domain crates only emit `tracing` events; installing a subscriber is left to
//! the process that embeds them.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Like [`init`], with a caller-chosen filter used when `RUST_LOG` is unset.
pub fn init_with_default(directive: &str) {
    tracing::init_with_default(directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
