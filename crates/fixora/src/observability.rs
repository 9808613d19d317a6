//! Logging setup for Fixora binaries.
//!
//! Logs go to stderr so stdout carries only the generated output.

use fixora_error::{ConfigError, FixoraResult};
use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable enabling JSON log lines.
pub const JSON_LOGS_VAR: &str = "FIXORA_LOG_JSON";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset, or always when forced
    pub log_level: String,
    /// Ignore `RUST_LOG` and use `log_level`
    pub force_level: bool,
    /// Emit JSON-formatted log lines
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// `info` level, JSON output when `FIXORA_LOG_JSON` is truthy.
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            force_level: false,
            json_logs: is_truthy(env::var(JSON_LOGS_VAR).ok().as_deref()),
        }
    }

    /// Set the fallback log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Force `debug` regardless of `RUST_LOG`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
            self.force_level = true;
        }
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Filter built from `RUST_LOG` or the configured level.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the directive does not parse.
    pub fn env_filter(&self) -> FixoraResult<EnvFilter> {
        let from_env = if self.force_level {
            None
        } else {
            EnvFilter::try_from_default_env().ok()
        };
        match from_env {
            Some(filter) => Ok(filter),
            None => EnvFilter::try_new(&self.log_level).map_err(|e| {
                ConfigError::for_key("log_level", format!("{} ({})", e, self.log_level)).into()
            }),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails on an invalid filter directive or if a subscriber is already set.
pub fn init_observability(config: &ObservabilityConfig) -> FixoraResult<()> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

fn is_truthy(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(is_truthy(Some(value)), "{value}");
        }
        for value in ["0", "false", "", "json"] {
            assert!(!is_truthy(Some(value)), "{value}");
        }
        assert!(!is_truthy(None));
    }

    #[test]
    fn verbose_forces_debug() {
        let config = ObservabilityConfig::new().with_verbose(true);
        assert_eq!(config.log_level, "debug");
        assert!(config.force_level);
        assert_eq!(config.env_filter().unwrap().to_string(), "debug");
    }

    #[test]
    fn quiet_keeps_fallback_level() {
        let config = ObservabilityConfig::new().with_verbose(false).with_log_level("warn");
        assert_eq!(config.log_level, "warn");
        assert!(!config.force_level);
    }

    #[test]
    fn invalid_directive_is_a_config_error() {
        let config = ObservabilityConfig {
            log_level: "fixora=loud".to_string(),
            force_level: true,
            json_logs: false,
        };
        let err = config.env_filter().unwrap_err();
        assert!(err.message().contains("log_level"));
    }
}
