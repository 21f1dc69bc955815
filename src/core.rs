use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::bubble::BubbleSort;
use crate::error::{Error, Result};
use crate::insertion::InsertionSort;
use crate::instrumentation;
use crate::merge::MergeSort;
use crate::quick::QuickSort;
use crate::selection::SelectionSort;

/// Returns `true` when `items` is non-decreasing under `compare`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Returns `true` when `items` is non-decreasing under its natural order.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    is_sorted_by(items, T::cmp)
}

// Every algorithm compares and swaps through these so the counters in
// `instrumentation` see all of the work.
#[inline]
pub(crate) fn is_greater<T, F>(compare: &mut F, a: &T, b: &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    instrumentation::add_comparisons(1);
    compare(a, b) == Ordering::Greater
}

#[inline]
pub(crate) fn is_less<T, F>(compare: &mut F, a: &T, b: &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    instrumentation::add_comparisons(1);
    compare(a, b) == Ordering::Less
}

#[inline]
pub(crate) fn swap<T>(items: &mut [T], a: usize, b: usize) {
    if a != b {
        instrumentation::add_swaps(1);
        items.swap(a, b);
    }
}

/// Trait describing a comparison sort.
///
/// Implementations take the sequence by value and hand the same buffer back
/// sorted, so the caller never holds an alias while the sort runs. Callers
/// that need the original order must clone before calling.
pub trait Sorter {
    /// Short lowercase name, used by [`Algorithm::from_str`] and in reports.
    const NAME: &'static str;
    /// Whether elements that compare equal keep their input order.
    const STABLE: bool;

    /// Sort `items` with a caller-supplied total order.
    fn sort_by<T, F>(&self, items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sort `items` by their natural order.
    fn sort<T: Ord>(&self, items: Vec<T>) -> Vec<T>
    where
        Self: Sized,
    {
        self.sort_by(items, T::cmp)
    }

    /// Sort `items` by a key extracted from each element.
    fn sort_by_key<T, K, F>(&self, items: Vec<T>, mut key: F) -> Vec<T>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(items, |a, b| key(a).cmp(&key(b)))
    }
}

/// Runtime selector over the five sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => BubbleSort::NAME,
            Algorithm::Insertion => InsertionSort::NAME,
            Algorithm::Selection => SelectionSort::NAME,
            Algorithm::Merge => MergeSort::NAME,
            Algorithm::Quick => QuickSort::NAME,
        }
    }

    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble => BubbleSort::STABLE,
            Algorithm::Insertion => InsertionSort::STABLE,
            Algorithm::Selection => SelectionSort::STABLE,
            Algorithm::Merge => MergeSort::STABLE,
            Algorithm::Quick => QuickSort::STABLE,
        }
    }

    pub fn sort_by<T, F>(self, items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubble => BubbleSort.sort_by(items, compare),
            Algorithm::Insertion => InsertionSort.sort_by(items, compare),
            Algorithm::Selection => SelectionSort.sort_by(items, compare),
            Algorithm::Merge => MergeSort.sort_by(items, compare),
            Algorithm::Quick => QuickSort.sort_by(items, compare),
        }
    }

    pub fn sort<T: Ord>(self, items: Vec<T>) -> Vec<T> {
        self.sort_by(items, T::cmp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| Error::invalid(format!("unknown sorting algorithm {s:?}")))
    }
}

/// Input-size limits for the combinatorial routines.
///
/// Powerset and permutation generation materialise 2^n and n! results, and
/// every recursive routine recurses once per input element, so inputs are
/// bounded before any work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinatoricsConfig {
    /// Longest input accepted by `powerset`.
    pub max_powerset_len: usize,
    /// Longest input accepted by `permutations` and the TSP routines.
    pub max_permutation_len: usize,
    /// Deepest recursion allowed, which for `subset_sum` is the input length.
    pub max_recursion_depth: usize,
}

impl Default for CombinatoricsConfig {
    fn default() -> Self {
        CombinatoricsConfig {
            max_powerset_len: 20,
            max_permutation_len: 10,
            max_recursion_depth: 4096,
        }
    }
}

impl CombinatoricsConfig {
    /// Reject configurations with a zero limit.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("max_powerset_len", self.max_powerset_len),
            ("max_permutation_len", self.max_permutation_len),
            ("max_recursion_depth", self.max_recursion_depth),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(Error::invalid(format!("{name} must be positive")));
            }
        }
        Ok(())
    }

    pub(crate) fn check_len(&self, what: &str, len: usize, limit: usize) -> Result<()> {
        self.validate()?;
        if len > limit {
            log::debug!("{what}: rejecting input of length {len}, limit is {limit}");
            return Err(Error::invalid(format!(
                "{what} input has {len} elements, limit is {limit}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn is_sorted_accepts_ties_and_rejects_descents() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 2, 3]));
        assert!(!is_sorted(&[1, 3, 2]));
        assert!(is_sorted_by(&[3, 2, 1], |a: &i32, b: &i32| b.cmp(a)));
    }

    #[test]
    fn swap_counts_only_real_swaps() {
        instrumentation::reset_counters();
        let mut v = [1, 2, 3];
        swap(&mut v, 1, 1);
        swap(&mut v, 0, 2);
        assert_eq!(v, [3, 2, 1]);
        assert_eq!(instrumentation::counters_snapshot().swaps, 1);
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
        }
        assert_eq!(" Merge ".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert!(matches!(
            "heap".parse::<Algorithm>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn stability_flags() {
        let stable: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_stable()).collect();
        assert_eq!(
            stable,
            vec![Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge]
        );
    }

    #[test]
    fn sort_by_key_orders_by_extracted_key() {
        let words = vec!["ccc", "a", "bb"];
        let sorted = MergeSort.sort_by_key(words, |w| w.len());
        assert_eq!(sorted, vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(CombinatoricsConfig::default().validate().is_ok());
        let config = CombinatoricsConfig {
            max_recursion_depth: 0,
            ..CombinatoricsConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidArgument(
                "max_recursion_depth must be positive".to_string()
            ))
        );
    }
}
