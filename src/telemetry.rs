//! Telemetry helpers for hosts embedding `linechart-compose`.
//!
//! Composition emits `tracing` events (compose passes at `debug`, highlight
//! transitions at `trace`). Hosts either call `init_default_tracing` or install
//! their own subscriber.

/// Default directive used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "linechart_compose=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_DIRECTIVE));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
