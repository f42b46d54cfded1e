//! Logging setup for the polybench binary.

use tracing_subscriber::EnvFilter;

/// Initialize console logging. Log lines go to stderr so that print-mode
/// stdout stays a clean report; `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
  let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}
