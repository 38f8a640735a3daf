//! Randomization: shuffling, bounded numbers, weighted picks.
//!
//! Every function takes the caller's RNG. Pass `rand::thread_rng()` for
//! ad-hoc use or a seeded `StdRng` (see [`crate::rng::SeedSource`]) when the
//! result must be reproducible.

use rand::Rng;
use thiserror::Error;

use crate::assert::{unreachable, UnreachableError};

/// A value paired with its relative selection weight.
pub type WeightedOption<T> = (T, f64);

/// Errors from bounded random number generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    #[error("empty integer range: [{min}, {max}) after normalizing bounds")]
    EmptyRange { min: i64, max: i64 },
    #[error("random bounds must be finite")]
    NonFiniteBound,
}

/// Shuffle `items` in place with Fisher–Yates and return the same slice.
///
/// This mutates the caller's data. Use [`shuffled`] to keep the input intact.
pub fn shuffle_in_place<'a, T, R: Rng + ?Sized>(items: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// Return a shuffled copy of `items`, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

/// Uniform integer in `[ceil(min), floor(max))`.
///
/// Fractional bounds are normalized first: `random_int(rng, 1.7, 5.9)` draws
/// from `2..5`. Fails when the normalized range holds no integer.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<i64, RandomError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomError::NonFiniteBound);
    }
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if hi <= lo {
        return Err(RandomError::EmptyRange { min: lo, max: hi });
    }
    Ok(rng.gen_range(lo..hi))
}

/// Uniform float in `[min, max)`.
///
/// Note the argument order: **max first, then min**. An ordered, finite
/// range never returns `max`. Inverted or non-finite bounds fall back to
/// `min + u * (max - min)`, so inverted bounds land in `(max, min]`.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, max: f64, min: f64) -> f64 {
    if min < max && (max - min).is_finite() {
        return rng.gen_range(min..max);
    }
    let u: f64 = rng.gen();
    u * (max - min) + min
}

/// Pick a value with probability proportional to its weight.
///
/// Weights need not sum to 1. If no cumulative weight exceeds the draw (every
/// weight zero or negative) the first option is returned. Fails only when
/// `options` is empty.
pub fn weighted_random<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    options: &'a [WeightedOption<T>],
) -> Result<&'a T, UnreachableError> {
    let Some((first, _)) = options.first() else {
        return unreachable("weighted_random", Some("weighted_random: no options to pick from"));
    };

    let total: f64 = options.iter().map(|(_, w)| w).sum();
    let draw = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for (value, weight) in options {
        cumulative += weight;
        if cumulative > draw {
            return Ok(value);
        }
    }
    Ok(first)
}
