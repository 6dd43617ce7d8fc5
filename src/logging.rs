//! Diagnostic logging.
//!
//! Events go to stderr so they never mix with the menu output on stdout.
//! `RUST_LOG` takes precedence; otherwise `--debug` selects `roster=debug`
//! and the default is `warn`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(debug: bool) {
    let default_directive = if debug { "roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
