//! Logging initialization
//!
//! `RUST_LOG` always wins. Without it, only warnings are shown unless the
//! user asked for verbose output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so report output stays clean on stdout
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(env_filter)
        .try_init();
}
