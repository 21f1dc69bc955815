use std::cmp::Ordering;

use crate::core::{Sorter, is_greater, swap};

/// Repeated adjacent-swap passes. Stable, in place.
///
/// Each pass carries the largest remaining element to the end of the
/// unsorted region, so the region shrinks by one per pass. A pass without any
/// swap means the slice is sorted and the loop stops, which makes sorted
/// input cost n-1 comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

/// Sort `items` in place by their natural order.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    bubble_sort_by(items, T::cmp)
}

/// Sort `items` in place with a caller-supplied total order.
pub fn bubble_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut end = items.len();
    let mut swapped = true;
    while swapped && end > 1 {
        swapped = false;
        for i in 1..end {
            // strict comparison keeps equal elements in input order
            if is_greater(&mut compare, &items[i - 1], &items[i]) {
                swap(items, i - 1, i);
                swapped = true;
            }
        }
        end -= 1;
    }
}

impl Sorter for BubbleSort {
    const NAME: &'static str = "bubble";
    const STABLE: bool = true;

    fn sort_by<T, F>(&self, mut items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        bubble_sort_by(&mut items, compare);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrumentation::{counters_snapshot, reset_counters};
    use test_log::test;

    #[test]
    fn sorts_reversed_input() {
        let mut v = vec![5, 4, 3, 2, 1];
        bubble_sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_input_takes_a_single_pass() {
        let mut v: Vec<u32> = (0..100).collect();
        reset_counters();
        bubble_sort(&mut v);
        let c = counters_snapshot();
        assert_eq!(c.comparisons, 99);
        assert_eq!(c.swaps, 0);
    }

    #[test]
    fn reversed_input_is_quadratic() {
        let mut v: Vec<u32> = (0..50).rev().collect();
        reset_counters();
        bubble_sort(&mut v);
        let c = counters_snapshot();
        // every pair is an inversion
        assert_eq!(c.swaps, 50 * 49 / 2);
        assert_eq!(c.comparisons, 50 * 49 / 2);
    }

    #[test]
    fn descending_comparator() {
        let sorted = BubbleSort.sort_by(vec![2, 9, 4], |a, b| b.cmp(a));
        assert_eq!(sorted, vec![9, 4, 2]);
    }
}
