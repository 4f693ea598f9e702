// Vector-backed directory simulation
//
// Times sort, sequential search, binary search, delete and ordered insert on
// a vector of synthetic file names.

/// Per-operation timings of one measurement run, in milliseconds.
///
/// `sort_ms` is a single-shot cost; every other field is an average over
/// the harness's repetitions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimingStats {
    pub sort_ms: f64,
    pub sequential_search_ms: f64,
    pub binary_search_ms: f64,
    pub deletion_ms: f64,
    pub insertion_ms: f64,
}

impl TimingStats {
    /// How many times slower a sequential search is than a binary search.
    ///
    /// `None` when the binary search time is zero or not a finite positive
    /// number, since the ratio is then meaningless.
    pub fn search_ratio(&self) -> Option<f64> {
        let bin = self.binary_search_ms;
        if bin.is_finite() && bin > 0.0 {
            Some(self.sequential_search_ms / bin)
        } else {
            None
        }
    }
}

impl std::fmt::Display for TimingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "TimingStats:")?;
        writeln!(f, "  Sort: {:.4} ms", self.sort_ms)?;
        writeln!(f, "  Sequential search: {:.4} ms/op", self.sequential_search_ms)?;
        writeln!(f, "  Binary search: {:.4} ms/op", self.binary_search_ms)?;
        writeln!(f, "  Deletion: {:.4} ms/op", self.deletion_ms)?;
        writeln!(f, "  Ordered insertion: {:.4} ms/op", self.insertion_ms)?;
        match self.search_ratio() {
            Some(r) => writeln!(f, "  Sequential/binary: {:.2}x", r)?,
            None => writeln!(f, "  Sequential/binary: N/A")?,
        }
        Ok(())
    }
}

pub mod array;
pub mod benchmark;
pub mod dataset;
pub mod error;

pub use array::{
    binary_search, delete, insertion_point, linear_search, ordered_insert, sort, unordered_append,
};
pub use benchmark::{BenchmarkConfig, BenchmarkRunner, MeasurementHarness, SizeTier, TierReport};
pub use dataset::{DatasetProvider, DirectoryProvider, NameGenerator, SyntheticProvider};
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_ratio() {
        let stats = TimingStats {
            sequential_search_ms: 1.0,
            binary_search_ms: 0.25,
            ..Default::default()
        };
        assert_eq!(stats.search_ratio(), Some(4.0));
    }

    #[test]
    fn test_search_ratio_undefined() {
        let mut stats = TimingStats {
            sequential_search_ms: 1.0,
            ..Default::default()
        };
        assert_eq!(stats.search_ratio(), None);
        stats.binary_search_ms = f64::NAN;
        assert_eq!(stats.search_ratio(), None);
        stats.binary_search_ms = -1.0;
        assert_eq!(stats.search_ratio(), None);
    }

    #[test]
    fn test_display_mentions_every_field() {
        let text = TimingStats::default().to_string();
        for label in ["Sort", "Sequential search", "Binary search", "Deletion", "Ordered insertion"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("N/A"));
    }
}
