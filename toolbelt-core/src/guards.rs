//! Predicates over untyped JSON values.

use serde_json::Value;

/// True for JSON objects; false for arrays, null and scalars.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True for JSON numbers. Numeric strings such as `"42"` do not count.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// True for any float except NaN. Infinities count as numbers.
pub fn is_number_f64(value: f64) -> bool {
    !value.is_nan()
}

pub fn is_non_empty<T>(items: &[T]) -> bool {
    !items.is_empty()
}
