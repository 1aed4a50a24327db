//! Log output for the route canvas.
//!
//! Every module emits `tracing` events under the `route_canvas` target:
//! location adds and rejected input, auto-fit results (scale and offsets),
//! pan gesture start/end and per-move deltas, optimize requests with their
//! failures, and one event per rendered frame. Nothing is printed unless a
//! subscriber is installed, either by the host or by `init_default_tracing`.

/// Filter used when `RUST_LOG` is unset: crate events at `info` and above,
/// everything else at `warn`. Auto-fit and optimize details sit at `debug`,
/// pan moves and frames at `trace`.
pub const DEFAULT_TRACING_FILTER: &str = "warn,route_canvas=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` without touching global state when the `telemetry`
/// feature is off or the host already installed a subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
