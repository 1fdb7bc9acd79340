//! Shared tracing/logging setup.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops and
/// return `false`.
pub fn init() -> bool {
    tracing::init()
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
