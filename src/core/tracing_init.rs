use crate::core::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset: the configured level for this
/// crate and its HTTP layers, warnings for everything else.
pub fn default_directives(config: &LoggingConfig) -> String {
    format!(
        "warn,usuarios={level},tower_http={level}",
        level = config.level
    )
}

pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let format_layer = if config.uses_console() {
        fmt::layer().with_target(false).compact().boxed()
    } else {
        fmt::layer().json().flatten_event(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(format_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_follow_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };

        let directives = default_directives(&config);
        assert_eq!(directives, "warn,usuarios=debug,tower_http=debug");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
