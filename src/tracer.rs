/*!
 * Tracing Setup
 * Optional subscriber for seeing poll diagnostics while running tests
 */

use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable switching output to JSON
pub const ENV_TRACE_JSON: &str = "PROBE_SYNC_TRACE_JSON";

/// Install a global tracing subscriber
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - PROBE_SYNC_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_test_writer()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!(json = use_json, "Tracing initialized");
    }
}
