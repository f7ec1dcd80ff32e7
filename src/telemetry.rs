//! Tracing setup for hosts that want to see what a chart does.
//!
//! The chart emits `trace!` on every appended stage, `warn!` when untyped
//! stage input is rejected or a stage has non-finite fill geometry, and
//! `debug!` once per render pass with the surface id and stage count. Events
//! are tagged with their module target (`pipeline_chart::api::...`), so a
//! filter such as `RUST_LOG=pipeline_chart=debug` isolates them.

/// Installs a compact, env-filtered subscriber (default level `info`) that
/// prints chart event targets.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
