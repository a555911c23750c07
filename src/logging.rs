use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` overrides the default of warnings only.
pub fn initialize_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME"))));
    // a subscriber installed earlier (tests) wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
