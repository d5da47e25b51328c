//! Logging setup helpers.
//!
//! The library only emits `tracing` spans and debug events; it never
//! prints a validation verdict. Installing a subscriber is the caller's
//! choice, and these helpers cover the common setups used by campaign
//! tooling.

use tracing::Level;

/// Configuration for shot-guard's logging setup.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application.
    pub level: Level,
    /// Whether to use JSON output format.
    pub json_format: bool,
    /// Environment filter override.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration for development use.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }

    /// Creates a configuration for production use.
    pub fn production() -> Self {
        Self {
            level: Level::WARN,
            json_format: true,
            env_filter: None,
        }
    }

    /// Sets the log level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets whether to use JSON output format.
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            filter.clone()
        } else {
            let level = self.level.as_str().to_lowercase();
            format!("{level},shot_guard={level}")
        }
    }
}

/// Initializes a `tracing` subscriber from the given configuration.
///
/// The `RUST_LOG` environment variable, when set, overrides the
/// configured filter. Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
