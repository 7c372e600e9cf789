//! Tracing subscriber setup

use crate::errors::FintrackError;
use config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.filter` when set. Fails if a global
/// subscriber is already installed or the filter directive is malformed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), FintrackError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| FintrackError::Logging(e.to_string()))?,
    };

    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json());
    let plain_layer = (!config.json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .try_init()
        .map_err(|e| FintrackError::Logging(e.to_string()))
}
