use crate::error::{Error, Result};

/// Check that `keys` is in non-decreasing order, reporting the first
/// violation.
pub fn verify_sorted(keys: &[String]) -> Result<()> {
    match keys.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(Error::SortOrderViolation {
            index: i + 1,
            previous: keys[i].clone(),
            current: keys[i + 1].clone(),
        }),
        None => Ok(()),
    }
}
