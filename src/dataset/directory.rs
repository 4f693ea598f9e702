use std::fs::{self, File};
use std::path::Path;

use tracing::{debug, warn};

use crate::array::unordered_append;
use crate::error::{Error, Result};

/// True when `dir` does not exist or has no entries at all.
pub fn is_missing_or_empty(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    Ok(entries.next().is_none())
}

/// Create `dir` if needed and write one zero-byte file per name.
///
/// Duplicate names collapse onto the same file. Returns the number of
/// create calls made.
pub fn materialize_directory(dir: &Path, names: &[String]) -> Result<usize> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    for name in names {
        let path = dir.join(name);
        File::create(&path).map_err(|e| Error::io(&path, e))?;
    }
    debug!(dir = %dir.display(), files = names.len(), "materialized directory");
    Ok(names.len())
}

/// Bare file names of the regular files directly under `dir`, in whatever
/// order the OS lists them.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => unordered_append(&mut names, name),
            Err(raw) => warn!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_then_empty_then_populated() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("dir_small");
        assert!(is_missing_or_empty(&dir).unwrap());

        fs::create_dir_all(&dir).unwrap();
        assert!(is_missing_or_empty(&dir).unwrap());

        materialize_directory(&dir, &["a.txt".to_string()]).unwrap();
        assert!(!is_missing_or_empty(&dir).unwrap());
    }

    #[test]
    fn test_list_skips_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let names = vec!["b.csv".to_string(), "a.txt".to_string()];
        materialize_directory(tmp.path(), &names).unwrap();
        fs::create_dir(tmp.path().join("nested.md")).unwrap();

        let mut listed = list_file_names(tmp.path()).unwrap();
        listed.sort();
        assert_eq!(listed, vec!["a.txt".to_string(), "b.csv".to_string()]);
    }

    #[test]
    fn test_files_are_zero_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        materialize_directory(tmp.path(), &["x.json".to_string()]).unwrap();
        let meta = fs::metadata(tmp.path().join("x.json")).unwrap();
        assert_eq!(meta.len(), 0);
    }

    #[test]
    fn test_listing_missing_directory_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = list_file_names(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
