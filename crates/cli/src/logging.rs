//! Diagnostic logging to stderr.
//!
//! Level comes from `[logging] level` in the config file (default `warn`).
//! `RUST_LOG` takes precedence when set:
//! ```bash
//! RUST_LOG=debug argand shell
//! RUST_LOG=argand_storage=debug argand history show
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        // A subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
