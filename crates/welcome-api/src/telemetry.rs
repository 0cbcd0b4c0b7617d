//! Tracing subscriber setup.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Target of the startup announcement. Always enabled at info, whatever
/// `RUST_LOG` says, since the line carries the bound port.
pub const STARTUP_TARGET: &str = "welcome_api::startup";

/// Builds the filter from a `RUST_LOG`-style directive string.
pub fn env_filter(log_level: &str) -> EnvFilter {
    let startup = format!("{STARTUP_TARGET}=info");
    EnvFilter::try_new(format!("{log_level},{startup}"))
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{startup}")))
}

/// Installs the global subscriber writing to stdout. Colors only on a terminal.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .init();
}
