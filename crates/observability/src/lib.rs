//! Tracing and logging setup shared by every binary in the workspace.

/// Initialize process-wide observability (tracing/logging).
///
/// `default_directive` applies when `RUST_LOG` is unset (e.g. `"info"`).
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
