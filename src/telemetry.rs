//! Tracing setup for applications embedding `axis-scale`.
//!
//! The engine only emits `tracing` events (scale computations at `debug`,
//! candidate scoring at `trace`). Installing a subscriber is left to the host
//! unless it opts into `init_default_tracing`.

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG` (default
/// `info`) when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
