use crate::error::HelloResult;
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use ::tracing::{debug, error, info, instrument, trace, warn};

/// Initializes the global tracing subscriber.
///
/// Log output goes to standard error so that it never mixes with the
/// program's standard output. The `RUST_LOG` environment variable controls
/// verbosity; nothing is emitted when it is unset. An
/// [`ErrorLayer`] is installed so that errors can capture span traces.
pub fn init_tracing() -> HelloResult<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .init();
    Ok(())
}
