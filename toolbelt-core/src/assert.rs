//! Assertion helpers — unreachable errors, required values, inline closures.
//!
//! `unreachable` exists for control flow the type system cannot close on its
//! own. Where a closed enum fits, match on it exhaustively instead.

use thiserror::Error;

/// A code path that was assumed unreachable was executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnreachableError {
    pub action: String,
    pub message: String,
}

/// A required value was absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MissingValueError {
    pub message: String,
}

const DEFAULT_MISSING_MESSAGE: &str = "require_value: value is absent";

/// Build the error reported by [`unreachable`].
///
/// `message` replaces the default `Unreachable action received for {action}`.
pub fn create_unreachable_error(action: &str, message: Option<&str>) -> UnreachableError {
    let message = match message {
        Some(m) => m.to_string(),
        None => format!("Unreachable action received for {action}"),
    };
    UnreachableError {
        action: action.to_string(),
        message,
    }
}

/// Always fails with an [`UnreachableError`].
///
/// Place it at the end of a conditional chain and propagate with `?`:
///
/// ```
/// use toolbelt_core::assert::{unreachable, UnreachableError};
///
/// fn variant(status: &str) -> Result<&'static str, UnreachableError> {
///     if status == "accepted" {
///         return Ok("constructive");
///     }
///     if status == "declined" {
///         return Ok("destructive");
///     }
///     unreachable("variant", None)
/// }
///
/// assert_eq!(variant("accepted").unwrap(), "constructive");
/// assert!(variant("pending").is_err());
/// ```
pub fn unreachable<T>(action: &str, message: Option<&str>) -> Result<T, UnreachableError> {
    Err(create_unreachable_error(action, message))
}

/// Return the value if present, otherwise a [`MissingValueError`].
///
/// Only `None` fails. `Some(0)`, `Some(false)` and `Some("")` pass through.
pub fn require_value<T>(value: Option<T>, message: Option<&str>) -> Result<T, MissingValueError> {
    value.ok_or_else(|| MissingValueError {
        message: message.unwrap_or(DEFAULT_MISSING_MESSAGE).to_string(),
    })
}

/// Return the value if present, otherwise the caller-supplied error.
pub fn require_value_or<T, E>(value: Option<T>, error: E) -> Result<T, E> {
    value.ok_or(error)
}

/// Immediately invoke `f` and return its result.
///
/// ```
/// use toolbelt_core::assert::iife;
///
/// let ready = true;
/// let label = iife(|| {
///     if ready {
///         return "go";
///     }
///     "wait"
/// });
/// assert_eq!(label, "go");
/// ```
pub fn iife<T>(f: impl FnOnce() -> T) -> T {
    f()
}
