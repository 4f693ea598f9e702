#![allow(dead_code)]

use dirsim::NameGenerator;
use rand::{SeedableRng, rngs::StdRng};

pub const SEED: u64 = 42;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// `n` generated file names from the fixed test seed.
pub fn file_names(n: usize) -> Vec<String> {
    NameGenerator::new().generate_many(&mut seeded_rng(), n)
}

pub fn is_sorted<T: Ord>(keys: &[T]) -> bool {
    keys.windows(2).all(|w| w[0] <= w[1])
}

pub fn count_of(keys: &[String], key: &str) -> usize {
    keys.iter().filter(|k| k.as_str() == key).count()
}
