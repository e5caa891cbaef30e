//! Pluggable logging capability.
//!
//! The envelope and notification codec log through a [`Logger`] injected at
//! build time. The default [`TracingLogger`] forwards to `tracing` under the
//! `waas_sdk` target and stays silent unless the client was built with
//! `debug(true)`; [`NoopLogger`] discards everything.

use serde_json::Value;
use tracing::Level;

/// `tracing` target for all SDK events.
pub const LOG_TARGET: &str = "waas_sdk";

/// Context placeholder for messages without structured fields.
pub const NO_CONTEXT: &Value = &Value::Null;

/// Logging capability consumed by the SDK.
///
/// Implement [`log`](Logger::log); the level helpers forward to it.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str, context: &Value);

    fn debug(&self, message: &str, context: &Value) {
        self.log(Level::DEBUG, message, context);
    }

    fn info(&self, message: &str, context: &Value) {
        self.log(Level::INFO, message, context);
    }

    fn warning(&self, message: &str, context: &Value) {
        self.log(Level::WARN, message, context);
    }

    fn error(&self, message: &str, context: &Value) {
        self.log(Level::ERROR, message, context);
    }
}

macro_rules! emit {
    ($mac:ident, $message:expr, $context:expr) => {
        if $context.is_null() {
            tracing::$mac!(target: LOG_TARGET, "{}", $message)
        } else {
            tracing::$mac!(target: LOG_TARGET, context = %$context, "{}", $message)
        }
    };
}

/// Default logger: forwards to `tracing` when enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    enabled: bool,
}

impl TracingLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str, context: &Value) {
        if !self.enabled {
            return;
        }
        match level {
            Level::ERROR => emit!(error, message, context),
            Level::WARN => emit!(warn, message, context),
            Level::INFO => emit!(info, message, context),
            Level::DEBUG => emit!(debug, message, context),
            _ => emit!(trace, message, context),
        }
    }
}

/// Logger that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _message: &str, _context: &Value) {}
}
