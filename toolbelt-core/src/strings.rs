//! String helpers: pluralization and lenient JSON parsing.

use serde::de::DeserializeOwned;

/// Pick the singular or plural form of a word for `count`.
///
/// Exactly 1 takes the singular. Anything else takes `plural` when given and
/// non-empty, otherwise the singular with an `s` appended.
pub fn pluralize(count: i64, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        return singular.to_string();
    }
    match plural {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => format!("{singular}s"),
    }
}

/// Parse JSON, returning `None` for empty or malformed input.
///
/// ```
/// use serde_json::Value;
/// use toolbelt_core::strings::safe_parse_json;
///
/// let v: Option<Value> = safe_parse_json(r#"{"foo":"bar"}"#);
/// assert_eq!(v.unwrap()["foo"], "bar");
/// assert!(safe_parse_json::<Value>("invalid").is_none());
/// ```
pub fn safe_parse_json<T: DeserializeOwned>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    serde_json::from_str(value).ok()
}
