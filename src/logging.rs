//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSection};

/// Directives used when neither `RUST_LOG` nor `logging.level` parse.
pub const FALLBACK_DIRECTIVES: &str = "articles_api=info,tower_http=info";

/// Filter built from `logging.level`, or [`FALLBACK_DIRECTIVES`] if it is invalid.
pub fn env_filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVES))
}

pub fn init_tracing(logging: &LoggingSection) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| env_filter_for(&logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).try_init()?;
        }
    }

    Ok(())
}
