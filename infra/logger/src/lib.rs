//! # Logger
//!
//! Installs the global `tracing` subscriber for processes that embed the `bemt` crates.
//! The library crates only emit events; a host (or a test, or a benchmark) decides where
//! they go by initializing a [`Logger`] once.
//!
//! * Console output in compact or JSON format.
//! * Level filtering via [`LoggerBuilder::level`], module-directed filters via
//!   [`LoggerBuilder::env_filter`] (e.g. `"bemt_transform=trace"`), or `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use bemt_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("bemt")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, json: false, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// Configures the process-wide tracing subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Names the host process; required before `init`.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "call `init` to install the subscriber"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `bemt_transform=trace`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "call `init` to install the subscriber"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    #[must_use = "call `init` to install the subscriber"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Emits console events as JSON lines.
    #[must_use = "call `init` to install the subscriber"]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, a disabled console,
    /// or an unparsable env filter.
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let console = if self.config.json {
            layer().json().with_ansi(false).boxed()
        } else {
            layer().compact().with_ansi(true).boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console)
            .try_init()
            .context(format!("Installing subscriber for '{}'", self.name.0))?;

        tracing::debug!(logger = %self.name.0, "Logger initialized");

        Ok(Logger { name: self.name.0 })
    }
}

/// Returned by a successful [`LoggerBuilder::init`].
#[must_use = "Keep the logger handle for the lifetime of the program."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Starts an unnamed [`LoggerBuilder`] with console output at `INFO`.
    #[must_use = "call `init` to install the subscriber"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if !config.console {
        return Err(LoggerError::InvalidConfiguration {
            message: "No logging layers enabled. Enable console output.".into(),
            context: Some(name.to_owned().into()),
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_initial_state() {
        let builder = Logger::builder().name("test-app").env_filter("bemt=debug");
        assert!(builder.config.console);
        assert!(!builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("bemt=debug"));
    }

    #[test]
    fn builder_configuration() {
        let builder = Logger::builder().name("test-app").json().level(LevelFilter::TRACE);
        assert!(builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::TRACE);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn disabled_console_is_rejected() {
        let err = Logger::builder().name("test-app").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { context: Some(_), .. }));
    }

    #[test]
    fn invalid_env_filter_is_rejected() {
        let err = Logger::builder().name("test-app").env_filter("bemt=notalevel").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
