//! Diagnostic logging.
//!
//! Log output goes to stderr so that stdout carries only results. The
//! `RUST_LOG` environment variable takes precedence over the level passed in:
//!
//! ```bash
//! RUST_LOG=swapcalc=debug swapcalc homework.txt
//! ```

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise the global subscriber.
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Arguments
/// * `level` - Default filter directive, such as `warn` or `swapcalc=debug`.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level)
        };

        fmt().with_env_filter(filter)
             .with_writer(std::io::stderr)
             .with_target(true)
             .without_time()
             .init();
    });
}
