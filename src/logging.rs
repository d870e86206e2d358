//! Logging subscriber initialisation.

use std::env;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::utils::{LogFormat, LoggingConfig};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global `tracing` subscriber described by `config`, writing to
/// stderr.
///
/// `RUST_LOG` directives take precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), LoggingError> {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();

    build_subscriber(config, directives.as_deref(), std::io::stderr).try_init()?;

    Ok(())
}

/// Build the subscriber described by `config` without installing it.
///
/// `directives` are `RUST_LOG`-style filter directives; when present and
/// valid they replace the configured level.
pub fn build_subscriber<W>(
    config: &LoggingConfig,
    directives: Option<&str>,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(config, directives))
}

fn build_env_filter(config: &LoggingConfig, directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.log_level))
}
