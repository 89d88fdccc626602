use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global log subscriber.
///
/// `RUST_LOG` overrides the level when set. Returns `false` if a subscriber
/// was already installed, in which case nothing changes.
pub fn init_logging(verbose: bool) -> bool {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
