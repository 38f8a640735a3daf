//! Statistical checks for the randomization helpers.
//!
//! All streams are seeded, so the thresholds below are checked against fixed
//! draws. The thresholds are loose enough that any reasonable seed passes.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use toolbelt_core::{
    random_float, random_int, shuffle_in_place, shuffled, weighted_random, SeedSource,
};

fn rng(label: &str) -> StdRng {
    SeedSource::new(20240101).rng_for(label, 0)
}

fn counts<'a>(picks: impl IntoIterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut out = HashMap::new();
    for p in picks {
        *out.entry(p).or_insert(0) += 1;
    }
    out
}

// ──────────────────────────────────────────────
// Shuffle
// ──────────────────────────────────────────────

#[test]
fn shuffle_actually_reorders() {
    let mut r = rng("shuffle");
    let items: Vec<u32> = (1..=10).collect();
    let distinct: HashSet<Vec<u32>> = (0..10).map(|_| shuffled(&items, &mut r)).collect();
    assert!(distinct.len() > 1);
}

#[test]
fn shuffle_every_position_reachable() {
    // With 4 elements and 2000 shuffles, each value should visit each slot.
    let mut r = rng("positions");
    let mut seen = [[false; 4]; 4];
    for _ in 0..2000 {
        let mut items = [0usize, 1, 2, 3];
        shuffle_in_place(&mut items, &mut r);
        for (slot, &value) in items.iter().enumerate() {
            seen[value][slot] = true;
        }
    }
    assert!(seen.iter().all(|row| row.iter().all(|&s| s)));
}

#[test]
fn shuffle_roughly_uniform_over_permutations() {
    // 3 elements → 6 permutations, expected 1000 each out of 6000.
    let mut r = rng("uniform");
    let mut tally: HashMap<[u8; 3], usize> = HashMap::new();
    for _ in 0..6000 {
        let mut items = [b'a', b'b', b'c'];
        shuffle_in_place(&mut items, &mut r);
        *tally.entry(items).or_insert(0) += 1;
    }
    assert_eq!(tally.len(), 6);
    for (perm, n) in &tally {
        assert!((800..1200).contains(n), "{perm:?} drawn {n} times");
    }
}

#[test]
fn shuffle_works_with_owned_structs() {
    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
    }
    let rows = vec![
        Row { id: 1, name: "foo".into() },
        Row { id: 2, name: "bar".into() },
        Row { id: 3, name: "baz".into() },
    ];
    let out = shuffled(&rows, &mut rng("rows"));
    let mut ids: Vec<u32> = out.iter().map(|r| r.id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3]);
    for row in &rows {
        assert!(out.contains(row));
    }
}

// ──────────────────────────────────────────────
// Bounded numbers
// ──────────────────────────────────────────────

#[test]
fn random_int_includes_min_excludes_max() {
    let mut r = rng("int-bounds");
    let draws: Vec<i64> = (0..100).map(|_| random_int(&mut r, 5.0, 7.0).unwrap()).collect();
    assert!(draws.contains(&5));
    assert!(draws.iter().all(|&d| d == 5 || d == 6));
}

#[test]
fn random_int_negative_and_crossing_zero() {
    let mut r = rng("int-negative");
    for _ in 0..200 {
        let v = random_int(&mut r, -10.0, -5.0).unwrap();
        assert!((-10..-5).contains(&v));
        let w = random_int(&mut r, -5.0, 5.0).unwrap();
        assert!((-5..5).contains(&w));
    }
}

#[test]
fn random_int_spreads_over_range() {
    let mut r = rng("int-spread");
    let distinct: HashSet<i64> = (0..100).map(|_| random_int(&mut r, 0.0, 100.0).unwrap()).collect();
    assert!(distinct.len() > 10);
}

#[test]
fn random_float_ranges() {
    let mut r = rng("float");
    for (max, min) in [(10.0, 0.0), (-5.0, -10.0), (5.0, -5.0), (5.5, 1.5), (0.2, 0.1)] {
        for _ in 0..100 {
            let v = random_float(&mut r, max, min);
            assert!(v >= min && v < max, "{v} outside [{min}, {max})");
        }
    }
}

#[test]
fn random_float_is_not_integral() {
    let mut r = rng("float-fraction");
    let draws: Vec<f64> = (0..10).map(|_| random_float(&mut r, 10.0, 0.0)).collect();
    assert!(draws.iter().any(|d| d.fract() != 0.0));
    let distinct: HashSet<u64> = draws.iter().map(|d| d.to_bits()).collect();
    assert!(distinct.len() > 5);
}

// ──────────────────────────────────────────────
// Weighted picks
// ──────────────────────────────────────────────

#[test]
fn weighted_favors_heavy_option() {
    let mut r = rng("weighted-heavy");
    let options = [("rare", 1.0), ("common", 99.0)];
    let picks = (0..100).map(|_| *weighted_random(&mut r, &options).unwrap());
    let tally = counts(picks);
    assert!(tally.get("common").copied().unwrap_or(0) > 80);
}

#[test]
fn weighted_very_unbalanced() {
    let mut r = rng("weighted-unbalanced");
    let options = [("rare", 1.0), ("common", 1000.0)];
    let picks = (0..100).map(|_| *weighted_random(&mut r, &options).unwrap());
    assert!(counts(picks).get("common").copied().unwrap_or(0) > 95);
}

#[test]
fn weighted_ratios_are_ordered() {
    let mut r = rng("weighted-ratio");
    let options = [("low", 1.0), ("medium", 5.0), ("high", 10.0)];
    let picks = (0..1600).map(|_| *weighted_random(&mut r, &options).unwrap());
    let tally = counts(picks);
    let n = |k: &str| tally.get(k).copied().unwrap_or(0);
    assert!(n("high") > n("medium"));
    assert!(n("medium") > n("low"));
}

#[test]
fn weighted_equal_weights_hit_several() {
    let mut r = rng("weighted-equal");
    let options = [("a", 1.0), ("b", 1.0), ("c", 1.0)];
    let picks = (0..90).map(|_| *weighted_random(&mut r, &options).unwrap());
    assert!(counts(picks).len() > 1);
}

#[test]
fn weighted_decimal_weights_and_many_options() {
    let mut r = rng("weighted-many");
    let decimal = [("a", 0.5), ("b", 0.3), ("c", 0.2)];
    assert!(["a", "b", "c"].contains(weighted_random(&mut r, &decimal).unwrap()));

    let many: Vec<(String, f64)> = (0..100).map(|i| (format!("option{i}"), 1.0)).collect();
    let picked = weighted_random(&mut r, &many).unwrap();
    assert!(picked.starts_with("option"));
}

#[test]
fn weighted_empty_fails() {
    let empty: Vec<(u8, f64)> = Vec::new();
    assert!(weighted_random(&mut rng("weighted-empty"), &empty).is_err());
}
