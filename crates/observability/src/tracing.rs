//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Subscriber installed by [`init`].
pub type JsonSubscriber =
    tracing_subscriber::fmt::Subscriber<JsonFields, Format<Json, SystemTime>, EnvFilter>;

/// Build the log filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the JSON subscriber without installing it.
pub fn subscriber() -> JsonSubscriber {
    // Audit records keep their `audit` target.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(SystemTime)
        .with_target(true)
        .finish()
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times: only the first call installs a subscriber,
/// and the return value says whether this call was that one.
pub fn init() -> bool {
    subscriber().try_init().is_ok()
}
