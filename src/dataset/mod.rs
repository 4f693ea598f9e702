//! Where the keys come from.
//!
//! The harness only needs a `Vec<String>`; providers decide whether those
//! names live purely in memory or as empty files on disk.

pub mod directory;
pub mod names;

use std::path::PathBuf;

use rand::RngCore;
use tracing::{debug, info};

use crate::error::Result;

pub use directory::{is_missing_or_empty, list_file_names, materialize_directory};
pub use names::{EXTENSIONS, NameGenerator};

pub trait DatasetProvider {
    /// Produce the working key collection, unordered.
    fn load_keys(&self, rng: &mut dyn RngCore) -> Result<Vec<String>>;

    fn description(&self) -> String;
}

/// Keys generated straight into memory.
pub struct SyntheticProvider {
    pub count: usize,
    pub names: NameGenerator,
}

impl SyntheticProvider {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            names: NameGenerator::default(),
        }
    }
}

impl DatasetProvider for SyntheticProvider {
    fn load_keys(&self, rng: &mut dyn RngCore) -> Result<Vec<String>> {
        Ok(self.names.generate_many(rng, self.count))
    }

    fn description(&self) -> String {
        format!("synthetic in-memory dataset ({} names)", self.count)
    }
}

/// Keys backed by zero-byte files in a working directory.
///
/// The directory is only generated when it is missing or empty; an existing
/// populated directory is reused, and its listing is cut down to `count`
/// names when it holds more.
pub struct DirectoryProvider {
    pub dir: PathBuf,
    pub count: usize,
    pub names: NameGenerator,
}

impl DirectoryProvider {
    pub fn new(dir: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            dir: dir.into(),
            count,
            names: NameGenerator::default(),
        }
    }
}

impl DatasetProvider for DirectoryProvider {
    fn load_keys(&self, rng: &mut dyn RngCore) -> Result<Vec<String>> {
        if is_missing_or_empty(&self.dir)? {
            info!(
                dir = %self.dir.display(),
                count = self.count,
                "generating synthetic directory"
            );
            let names = self.names.generate_many(rng, self.count);
            materialize_directory(&self.dir, &names)?;
        }

        info!(dir = %self.dir.display(), "loading file names");
        let mut keys = list_file_names(&self.dir)?;
        if keys.len() > self.count {
            debug!(
                listed = keys.len(),
                count = self.count,
                "directory holds more files than requested, truncating"
            );
            keys.truncate(self.count);
        }
        Ok(keys)
    }

    fn description(&self) -> String {
        format!("directory {:?} ({} names requested)", self.dir, self.count)
    }
}
