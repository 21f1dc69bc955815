use std::cmp::Ordering;

use crate::core::{Sorter, is_greater};
use crate::instrumentation;

/// Top-down merge sort: halve, sort both halves, merge.
///
/// Works on owned buffers so no `Clone` bound is needed; elements are moved
/// from the halves into the merged output. O(n log n) comparisons in every
/// case, O(n) auxiliary space, recursion depth O(log n). Stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

pub fn merge_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(items, &mut compare)
}

fn sort_recursive<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    instrumentation::add_recursive_calls(1);
    if items.len() < 2 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = sort_recursive(items, compare);
    let right = sort_recursive(right, compare);
    merge_inner(left, right, compare)
}

/// Merge two sorted vectors into one sorted vector.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    merge_by(left, right, T::cmp)
}

/// Merge two vectors already sorted under `compare`. On ties the element from
/// `left` comes first.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_inner(left, right, &mut compare)
}

fn merge_inner<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_greater(compare, l, r),
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    // at most one side still has elements
    merged.extend(left);
    merged.extend(right);
    merged
}

impl Sorter for MergeSort {
    const NAME: &'static str = "merge";
    const STABLE: bool = true;

    fn sort_by<T, F>(&self, items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort_by(items, compare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrumentation::{counters_snapshot, reset_counters};
    use test_log::test;

    #[test]
    fn sorts_sample() {
        assert_eq!(merge_sort(vec![5, 2, 5, 3, 1, 6]), vec![1, 2, 3, 5, 5, 6]);
    }

    #[test]
    fn merge_drains_the_longer_side() {
        assert_eq!(merge(vec![1, 4], vec![2, 3, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(merge(Vec::new(), vec![1, 2]), vec![1, 2]);
        assert_eq!(merge(vec![7], Vec::new()), vec![7]);
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = vec![(1, 'l'), (2, 'l')];
        let right = vec![(1, 'r'), (2, 'r')];
        let merged = merge_by(left, right, |a, b| a.0.cmp(&b.0));
        assert_eq!(merged, vec![(1, 'l'), (1, 'r'), (2, 'l'), (2, 'r')]);
    }

    #[test]
    fn moves_non_clone_values() {
        struct Token(u8);
        let sorted = merge_sort_by(vec![Token(3), Token(1), Token(2)], |a, b| a.0.cmp(&b.0));
        let ids: Vec<u8> = sorted.iter().map(|t| t.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn comparisons_stay_n_log_n() {
        let v: Vec<u32> = (0..1024).rev().collect();
        reset_counters();
        let sorted = merge_sort(v);
        assert!(crate::core::is_sorted(&sorted));
        // n * log2(n) = 10240
        assert!(counters_snapshot().comparisons <= 1024 * 10);
    }
}
