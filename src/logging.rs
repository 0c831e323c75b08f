//! Tracing setup. Logs go to stderr; stdout stays clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "MODMAP_LOG";

/// Install the global subscriber.
///
/// The filter is read from `MODMAP_LOG` and defaults to `warn`, so a
/// successful run prints nothing. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let _ = tracing_subscriber::registry().with(filter).with(stderr_layer).try_init();
}
