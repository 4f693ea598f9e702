use std::fmt;
use std::path::PathBuf;

use crate::TimingStats;
use crate::error::{Error, Result};

pub const DEFAULT_REPETITIONS: usize = 100_000;
pub const DEFAULT_WORKING_SET_CAP: usize = 10_000;

/// Nominal directory size. Only drives labels and directory naming; the
/// number of keys actually measured is capped by
/// [`BenchmarkConfig::working_set_cap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    pub fn nominal_count(self) -> usize {
        match self {
            SizeTier::Small => 200_000,
            SizeTier::Medium => 1_000_000,
            SizeTier::Large => 10_000_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
        }
    }

    pub fn dir_name(self) -> String {
        format!("dir_{}", self.label())
    }

    pub fn working_size(self, cap: usize) -> usize {
        self.nominal_count().min(cap)
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Repetitions per amortized phase.
    pub repetitions: usize,
    pub working_set_cap: usize,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Parent of the per-tier `dir_*` working directories.
    pub data_dir: PathBuf,
    /// Back the dataset with zero-byte files instead of memory only.
    pub materialize: bool,
    /// Check sorted order after the sort phase.
    pub verify: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            working_set_cap: DEFAULT_WORKING_SET_CAP,
            seed: None,
            data_dir: PathBuf::from("."),
            materialize: true,
            verify: false,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::Config("repetitions must be at least 1"));
        }
        Ok(())
    }

    pub fn tier_dir(&self, tier: SizeTier) -> PathBuf {
        self.data_dir.join(tier.dir_name())
    }
}

/// Outcome of one tier: what was measured and on how many keys.
#[derive(Clone, Debug)]
pub struct TierReport {
    pub tier: SizeTier,
    pub key_count: usize,
    pub stats: TimingStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_size_is_capped() {
        assert_eq!(SizeTier::Small.working_size(10_000), 10_000);
        assert_eq!(SizeTier::Large.working_size(usize::MAX), 10_000_000);
        assert_eq!(SizeTier::Medium.working_size(0), 0);
    }

    #[test]
    fn test_tier_dirs_are_distinct() {
        let config = BenchmarkConfig::default();
        let dirs: Vec<_> = SizeTier::ALL.iter().map(|t| config.tier_dir(*t)).collect();
        assert_eq!(dirs[0], PathBuf::from("./dir_small"));
        assert_ne!(dirs[0], dirs[1]);
        assert_ne!(dirs[1], dirs[2]);
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let config = BenchmarkConfig {
            repetitions: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        assert!(BenchmarkConfig::default().validate().is_ok());
    }
}
