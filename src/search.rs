//! Binary search over an ascending sequence.
//!
//! The sequence must already be sorted ascending; this is not checked. On
//! unsorted input the answer is unspecified (but the call still terminates
//! and never panics). An empty sequence is an empty range, so every search
//! in it returns `false`.

use std::cmp::Ordering;

use crate::instrumentation;

/// Returns `true` when `target` occurs in the ascending slice `items`.
///
/// ```
/// use algokit::binary_search;
/// assert!(binary_search(&5, &[1, 2, 3, 5, 8]));
/// assert!(!binary_search(&4, &[1, 2, 3, 5, 8]));
/// assert!(!binary_search(&4, &[]));
/// ```
pub fn binary_search<T: Ord>(target: &T, items: &[T]) -> bool {
    binary_search_by(items, |probe| probe.cmp(target))
}

/// Bisect with a probe that reports how an element orders relative to the
/// value being looked for (`Less` means the element is before it).
pub fn binary_search_by<T, F>(items: &[T], mut probe: F) -> bool
where
    F: FnMut(&T) -> Ordering,
{
    if items.is_empty() {
        return false;
    }
    // closed bounds [start, end]
    let mut start = 0usize;
    let mut end = items.len() - 1;
    while start <= end {
        let median = start + (end - start) / 2;
        instrumentation::add_comparisons(1);
        match probe(&items[median]) {
            Ordering::Equal => return true,
            Ordering::Greater => match median.checked_sub(1) {
                Some(e) => end = e,
                None => return false,
            },
            Ordering::Less => start = median + 1,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrumentation::{counters_snapshot, reset_counters};
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn finds_present_and_rejects_missing() {
        let items = [1, 2, 3, 5, 8];
        assert!(binary_search(&5, &items));
        assert!(!binary_search(&4, &items));
        assert!(binary_search(&1, &items));
        assert!(binary_search(&8, &items));
        assert!(!binary_search(&0, &items));
        assert!(!binary_search(&9, &items));
    }

    #[test]
    fn empty_sequence_is_not_found() {
        let items: [i32; 0] = [];
        assert!(!binary_search(&1, &items));
    }

    #[test]
    fn single_element() {
        assert!(binary_search(&3, &[3]));
        assert!(!binary_search(&2, &[3]));
        assert!(!binary_search(&4, &[3]));
    }

    #[test]
    fn comparisons_are_logarithmic() {
        let items: Vec<u32> = (0..1_000_000).collect();
        reset_counters();
        assert!(!binary_search(&1_000_000, &items));
        // ceil(log2(1_000_001)) = 20
        assert!(counters_snapshot().comparisons <= 20);
    }

    #[test]
    fn probe_by_key() {
        let people = [("ada", 36), ("bob", 41), ("cy", 58)];
        assert!(binary_search_by(&people, |p| p.1.cmp(&41)));
        assert!(!binary_search_by(&people, |p| p.1.cmp(&40)));
    }

    #[quickcheck]
    fn agrees_with_linear_membership(items: Vec<i16>, target: i16) -> bool {
        let mut items = items;
        items.sort();
        binary_search(&target, &items) == items.contains(&target)
    }
}
