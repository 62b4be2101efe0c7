use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset
const DEFAULT_FILTER: &str = "grade_tracker=info";

/// Install the global fmt subscriber.
///
/// Honours RUST_LOG, e.g. `RUST_LOG=grade_tracker=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
