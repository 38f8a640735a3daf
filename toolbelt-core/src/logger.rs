//! Minimal leveled logger.
//!
//! Each call writes one line:
//!
//! ```text
//! [2024-01-01T12:00:00.000Z] WARN: [Scope] message
//! ```
//!
//! The scope segment is omitted for unscoped loggers. Write failures are
//! ignored; logging never fails the caller.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

/// Severity tag printed on each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a log line without the trailing newline.
pub fn format_line(
    timestamp: DateTime<Utc>,
    level: LogLevel,
    scope: Option<&str>,
    message: &str,
) -> String {
    let ts = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
    match scope {
        Some(scope) => format!("[{ts}] {level}: [{scope}] {message}"),
        None => format!("[{ts}] {level}: {message}"),
    }
}

/// Logger writing to `W` (stdout by default), optionally tagged with a scope.
pub struct Logger<W: Write = io::Stdout> {
    scope: Option<String>,
    out: Mutex<W>,
}

impl Logger<io::Stdout> {
    pub fn new(scope: Option<&str>) -> Self {
        Self::with_writer(scope, io::stdout())
    }
}

impl<W: Write> Logger<W> {
    pub fn with_writer(scope: Option<&str>, writer: W) -> Self {
        Self {
            scope: scope.map(str::to_string),
            out: Mutex::new(writer),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let line = format_line(Utc::now(), level, self.scope(), message);
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("scope", &self.scope).finish()
    }
}

/// Stdout logger with an optional scope.
pub fn create_logger(scope: Option<&str>) -> Logger {
    Logger::new(scope)
}

/// Process-wide unscoped stdout logger.
pub fn logger() -> &'static Logger {
    static DEFAULT: OnceLock<Logger> = OnceLock::new();
    DEFAULT.get_or_init(|| Logger::new(None))
}
