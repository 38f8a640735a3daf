//! Comparator factories for sorting by an extracted key.
//!
//! Each factory returns a closure usable with `slice::sort_by`. `sort_by` is
//! stable, so items with equal keys keep their input order.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result for this direction.
    pub fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Text named no sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort direction {0:?}, expected \"asc\" or \"desc\"")]
pub struct ParseDirectionError(pub String);

impl FromStr for SortDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Coercion of a date-like value to milliseconds since the Unix epoch.
pub trait EpochMillis {
    fn epoch_millis(&self) -> i64;
}

impl<Tz: TimeZone> EpochMillis for DateTime<Tz> {
    fn epoch_millis(&self) -> i64 {
        self.timestamp_millis()
    }
}

/// Interpreted as UTC.
impl EpochMillis for NaiveDateTime {
    fn epoch_millis(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }
}

/// Midnight UTC of the given day.
impl EpochMillis for NaiveDate {
    fn epoch_millis(&self) -> i64 {
        self.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }
}

/// Comparator over any partially ordered key.
///
/// Keys that do not compare (NaN) are treated as equal.
pub fn sort_fn<T, K, F>(dir: SortDirection, key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| {
        let ascending = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        dir.apply(ascending)
    }
}

/// Comparator ordering items by a numeric key.
///
/// ```
/// use toolbelt_core::compare::{number_sort_fn, SortDirection};
///
/// struct Account { followers: f64 }
///
/// let mut items = vec![Account { followers: 59.0 }, Account { followers: 42.0 }];
/// items.sort_by(number_sort_fn(SortDirection::Asc, |a: &Account| a.followers));
/// assert_eq!(items[0].followers, 42.0);
/// ```
pub fn number_sort_fn<T, F>(dir: SortDirection, key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> f64,
{
    sort_fn(dir, key)
}

/// Comparator ordering items by a date-like key, compared as epoch milliseconds.
pub fn date_sort_fn<T, D, F>(dir: SortDirection, key: F) -> impl Fn(&T, &T) -> Ordering
where
    D: EpochMillis,
    F: Fn(&T) -> D,
{
    sort_fn(dir, move |item: &T| key(item).epoch_millis())
}
