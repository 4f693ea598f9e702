use std::borrow::Borrow;

use super::search::{binary_search, insertion_point, linear_search};

/// Lexicographic ascending sort, in place. Keys are assumed unique so
/// stability does not matter.
pub fn sort<T: Ord>(keys: &mut [T]) {
    keys.sort_unstable();
}

/// Insert `value` into a sorted vector at its ordered position and return
/// that position. O(log n) to locate, O(n) to shift.
pub fn ordered_insert<T: Ord>(keys: &mut Vec<T>, value: T) -> usize {
    let pos = insertion_point(keys, &value);
    keys.insert(pos, value);
    pos
}

/// Remove one occurrence of `key`.
///
/// With `assume_sorted` the key is located by bisection, otherwise by a
/// front-to-back scan. Returns false and leaves `keys` untouched on a miss.
pub fn delete<T, Q>(keys: &mut Vec<T>, key: &Q, assume_sorted: bool) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let found = if assume_sorted {
        binary_search(keys, key)
    } else {
        linear_search(keys, key)
    };

    match found {
        Some(idx) => {
            keys.remove(idx);
            true
        }
        None => false,
    }
}

/// Append without regard to order.
pub fn unordered_append<T>(keys: &mut Vec<T>, value: T) {
    keys.push(value);
}
