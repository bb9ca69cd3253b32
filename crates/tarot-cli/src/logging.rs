use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TAROT_LOG=debug`.
pub const LOG_ENV: &str = "TAROT_LOG";

/// Install a stderr subscriber so stdout stays clean for prompts and JSON.
///
/// Defaults to `warn` when `TAROT_LOG` is unset or unparsable.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
