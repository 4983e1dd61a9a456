//! Log subscriber setup.
//!
//! Records go to stderr so they never mix with rendered output on stdout.

use clap::ValueEnum;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::CliError;

/// Environment variable holding the filter directive, e.g. `briefdoc_core=trace`.
pub const LOG_ENV: &str = "BRIEFDOC_LOG";

/// Shape of emitted log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Single-line human-readable records.
    #[default]
    Compact,
    /// One JSON object per record.
    Json,
}

/// Install the global subscriber. Defaults to `warn` when `BRIEFDOC_LOG` is unset.
pub fn init(format: LogFormat) -> Result<(), CliError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let fmt_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
