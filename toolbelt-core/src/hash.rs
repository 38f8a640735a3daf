//! Deterministic string hashing into a bounded integer range.
//!
//! Used for stable bucketing: the same input maps to the same bucket on every
//! run and platform. The output must stay bit-for-bit compatible with existing
//! callers, so the arithmetic is fixed: 32-bit wrapping over UTF-16 code units.

use std::num::NonZeroU32;

/// Hash `input` to a non-negative integer, optionally reduced modulo `range`.
///
/// ```
/// use std::num::NonZeroU32;
/// use toolbelt_core::hash::hash_string_to_number;
///
/// assert_eq!(hash_string_to_number("foo", None), 101574);
/// assert_eq!(hash_string_to_number("foo", NonZeroU32::new(100)), 74);
/// ```
pub fn hash_string_to_number(input: &str, range: Option<NonZeroU32>) -> u32 {
    let hash = input.encode_utf16().fold(0i32, |acc, unit| {
        // (acc << 5) - acc == acc * 31
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit))
    });

    let magnitude = hash.unsigned_abs();
    match range {
        Some(range) => magnitude % range,
        None => magnitude,
    }
}
