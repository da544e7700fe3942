//! Tracing setup and tracing-backed UI ports

mod toasts;

use opsdesk_domain::{LoggingConfig, OpsDeskError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use toasts::{TracingNavigator, TracingNotifier};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.level`. Calling this twice returns
/// [`OpsDeskError::Config`] instead of panicking.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), OpsDeskError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| OpsDeskError::Config(format!("Invalid log filter '{}': {err}", config.level)))?;

    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
    };

    result.map_err(|err| OpsDeskError::Config(format!("Tracing already initialised: {err}")))
}
