//! Logging setup for the CLI.
//!
//! INFO+ to stdout by default. `RUST_LOG` overrides the filter; setting
//! `DEBUG_LOGGING=1` enables debug output for the zulrah crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,zulrah_core=debug,zulrah_cli=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive)))
        .init();

    tracing::debug!(debug_logging, "Logging initialized");
}
