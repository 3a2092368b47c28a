//! Log output for the binaries.

use std::io::IsTerminal;
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry };

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, defaulting to
/// `info`.
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter
        = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer
        = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
