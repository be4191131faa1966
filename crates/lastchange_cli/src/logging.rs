use tracing_subscriber::EnvFilter;

/// Warn-level logging to stderr unless `RUST_LOG` says otherwise.
/// Stdout stays reserved for the revision itself.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
