use tracing::{event, Level};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Installs the JSON fmt subscriber used by embedding binaries and local
/// debugging. Level selection follows the `ROSTRA_TRACING_LEVEL` environment
/// variable. The engine crates only emit `tracing` events; whether anything
/// listens is the embedder's choice.
pub fn setup_logging() {
    let fmt_layer = fmt::layer()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_filter(EnvFilter::from_env("ROSTRA_TRACING_LEVEL"));

    tracing_subscriber::registry().with(fmt_layer).init();

    event!(Level::INFO, "logging initialized");
}
