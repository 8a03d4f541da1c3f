use tracing_subscriber::EnvFilter;

/// Initialize structured JSON logging on stderr.
///
/// Quiet mode (the CLI default) disables every level so stdout/stderr carry
/// only user-facing output. Verbose mode logs at `info`, refined by `RUST_LOG`
/// when it is set.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // A second call (tests, embedders) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
