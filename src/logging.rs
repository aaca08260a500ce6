use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` wins, otherwise `fallback` directives.
pub fn env_filter(fallback: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("Invalid LOG_FILTER '{}'", fallback)),
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logging(fallback: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(fallback)?)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}
