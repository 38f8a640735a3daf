//! Toolbelt Core — small helpers shared across applications.
//!
//! - Comparator factories for sorting by numeric or date keys
//! - Shuffling, bounded random numbers and weighted picks over a caller RNG
//! - Seed derivation for reproducible random streams
//! - Deterministic string hashing into buckets
//! - Unreachable/required-value assertions
//! - Pluralization, lenient JSON parsing and JSON type guards
//! - A leveled, timestamped logger
//! - TOML defaults for the CLI

pub mod assert;
pub mod compare;
pub mod config;
pub mod guards;
pub mod hash;
pub mod logger;
pub mod random;
pub mod rng;
pub mod strings;

pub use assert::{
    create_unreachable_error, iife, require_value, require_value_or, unreachable,
    MissingValueError, UnreachableError,
};
pub use compare::{date_sort_fn, number_sort_fn, sort_fn, EpochMillis, SortDirection};
pub use hash::hash_string_to_number;
pub use logger::{create_logger, logger, LogLevel, Logger};
pub use random::{
    random_float, random_int, shuffle_in_place, shuffled, weighted_random, RandomError,
    WeightedOption,
};
pub use rng::SeedSource;
pub use strings::{pluralize, safe_parse_json};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: public types can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<SortDirection>();
        require_sync::<SortDirection>();
        require_send::<SeedSource>();
        require_sync::<SeedSource>();
        require_send::<Logger>();
        require_sync::<Logger>();
        require_send::<UnreachableError>();
        require_sync::<UnreachableError>();
        require_send::<MissingValueError>();
        require_sync::<MissingValueError>();
        require_send::<RandomError>();
        require_sync::<RandomError>();
        require_send::<config::ToolbeltConfig>();
        require_sync::<config::ToolbeltConfig>();
    }

    #[test]
    fn reexports_match_modules() {
        assert_eq!(hash_string_to_number("foo", None), hash::hash_string_to_number("foo", None));
        assert_eq!(pluralize(2, "crate", None), "crates");
    }
}
