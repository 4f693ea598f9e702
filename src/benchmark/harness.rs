use std::collections::HashSet;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use super::verification::verify_sorted;
use crate::TimingStats;
use crate::array::{binary_search, delete, linear_search, ordered_insert, sort};
use crate::dataset::NameGenerator;
use crate::error::{Error, Result};

/// Drives the timed phases over one key collection.
///
/// Phases run in a fixed order (sequential search, sort, binary search,
/// deletion, ordered insertion) on a private copy of the input, so callers
/// always get their collection back exactly as it was.
pub struct MeasurementHarness<R: Rng> {
    rng: R,
    repetitions: usize,
    verify: bool,
    names: NameGenerator,
}

impl<R: Rng> MeasurementHarness<R> {
    pub fn new(rng: R, repetitions: usize) -> Self {
        Self {
            rng,
            repetitions,
            verify: false,
            names: NameGenerator::default(),
        }
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Generator used for the fresh keys of the insertion phase.
    pub fn with_name_generator(mut self, names: NameGenerator) -> Self {
        self.names = names;
        self
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn measure(&mut self, keys: &[String]) -> Result<TimingStats> {
        if self.repetitions == 0 {
            return Err(Error::Config("repetitions must be at least 1"));
        }
        if keys.is_empty() {
            return Err(Error::EmptyDataset("measurement input".to_string()));
        }

        let reps = self.repetitions;
        let mut stats = TimingStats::default();

        // Baseline snapshot. Every later phase works on this copy.
        let mut working = keys.to_vec();

        info!(keys = working.len(), reps, "measuring sequential search");
        let start = Instant::now();
        for _ in 0..reps {
            let key = &working[self.rng.random_range(0..working.len())];
            black_box(linear_search(&working, key.as_str()));
        }
        stats.sequential_search_ms = amortized_ms(start.elapsed(), reps);

        info!("measuring sort");
        let start = Instant::now();
        sort(&mut working);
        stats.sort_ms = to_ms(start.elapsed());
        if self.verify {
            verify_sorted(&working)?;
            debug!("sorted order verified");
        }

        info!("measuring binary search");
        let start = Instant::now();
        for _ in 0..reps {
            let key = &working[self.rng.random_range(0..working.len())];
            black_box(binary_search(&working, key.as_str()));
        }
        stats.binary_search_ms = amortized_ms(start.elapsed(), reps);

        info!("measuring deletion");
        let (deletion_ms, deleted) = self.time_deletions(working.clone());
        stats.deletion_ms = deletion_ms;
        debug!(deleted, "deletion phase done");

        info!("measuring ordered insertion");
        let fresh = self.fresh_keys(&working, reps)?;
        let start = Instant::now();
        for key in fresh {
            black_box(ordered_insert(&mut working, key));
        }
        stats.insertion_ms = amortized_ms(start.elapsed(), reps);

        debug!(final_len = working.len(), "working copy discarded");
        Ok(stats)
    }

    /// Delete random existing keys from `scratch` until `repetitions`
    /// deletions have been attempted or it runs dry. Returns the per-deletion
    /// average and the number of keys actually removed.
    fn time_deletions(&mut self, mut scratch: Vec<String>) -> (f64, usize) {
        let mut deleted = 0;
        let start = Instant::now();
        for _ in 0..self.repetitions {
            if scratch.is_empty() {
                break;
            }
            let key = scratch[self.rng.random_range(0..scratch.len())].clone();
            if delete(&mut scratch, key.as_str(), true) {
                deleted += 1;
            }
        }
        (amortized_ms(start.elapsed(), deleted), deleted)
    }

    /// `count` new names absent from the sorted `existing` keys and distinct
    /// from each other. Generated outside any timed region.
    ///
    /// Gives up after a bounded number of draws, since a narrow name
    /// generator may not have `count` unused names left.
    fn fresh_keys(&mut self, existing: &[String], count: usize) -> Result<Vec<String>> {
        let max_attempts = count.saturating_mul(100).saturating_add(1000);
        let mut seen = HashSet::with_capacity(count);
        let mut fresh = Vec::with_capacity(count);
        let mut attempts = 0;
        while fresh.len() < count {
            if attempts == max_attempts {
                return Err(Error::Config("name space exhausted for fresh keys"));
            }
            attempts += 1;
            let name = self.names.generate(&mut self.rng);
            if binary_search(existing, name.as_str()).is_some() || !seen.insert(name.clone()) {
                continue;
            }
            fresh.push(name);
        }
        Ok(fresh)
    }
}

fn to_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Average per operation in milliseconds; 0.0 when nothing ran.
pub fn amortized_ms(elapsed: Duration, ops: usize) -> f64 {
    if ops == 0 {
        0.0
    } else {
        to_ms(elapsed) / ops as f64
    }
}
