use std::borrow::Borrow;
use std::cmp::Ordering;

/// Scan from the front and return the first index holding `key`.
///
/// No ordering precondition. O(n).
pub fn linear_search<T, Q>(keys: &[T], key: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Eq + ?Sized,
{
    keys.iter().position(|k| k.borrow() == key)
}

/// Bisection over a slice that is already sorted ascending.
///
/// Returns the index of some element equal to `key` (not necessarily the
/// first when duplicates exist). On unsorted input the answer is
/// meaningless but the call never panics.
pub fn binary_search<T, Q>(keys: &[T], key: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    // Half-open window [low, high)
    let mut low = 0;
    let mut high = keys.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match keys[mid].borrow().cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Position of the first element that is not less than `key`.
///
/// Inserting `key` here keeps a sorted slice sorted.
pub fn insertion_point<T, Q>(keys: &[T], key: &Q) -> usize
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut low = 0;
    let mut high = keys.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if keys[mid].borrow() < key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}
