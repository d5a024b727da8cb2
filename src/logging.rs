use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SIGNPOST_INDEX_LOG";

/// Install the stderr subscriber. Filter comes from `SIGNPOST_INDEX_LOG`,
/// `info` when unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        // A subscriber is already set (tests, embedding callers); keep it.
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
