use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl LoggingConfig {
    /// `RUST_LOG` wins; otherwise `--verbose` selects debug output for the
    /// pipeline and everything else stays at warn.
    pub fn from_env(verbose: bool) -> Self {
        Self::resolve(std::env::var("RUST_LOG").ok(), verbose)
    }

    fn resolve(rust_log: Option<String>, verbose: bool) -> Self {
        let log_level = rust_log
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| {
                if verbose {
                    String::from("warn,tickplot_core=debug,tickplot=debug")
                } else {
                    String::from("warn")
                }
            });
        Self { log_level }
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|error| CliError::Logging(error.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}
