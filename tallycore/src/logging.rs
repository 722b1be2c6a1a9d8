//! Log setup
//!
//! One `tracing` subscriber for the process, filtered by `RUST_LOG`
//! (default `info`).

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, or the default when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        tracing::info!("logging initialised");
    }
}
