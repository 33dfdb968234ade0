use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the diagnostic filter, e.g. `REPL_LOG=debug`.
pub const LOG_ENV: &str = "REPL_LOG";

/// Initialize tracing on stderr.
///
/// Logging is disabled unless `REPL_LOG` is set, so the prompt and the
/// command output are never interleaved with diagnostics by default.
pub fn init_tracing() {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return;
    };

    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("debug"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
