use std::cmp::Ordering;

use crate::core::{Sorter, is_greater};
use crate::instrumentation;

/// Grows a sorted prefix by shifting each new element left past strictly
/// larger predecessors. Stable, in place, linear on nearly sorted input.
///
/// Each shifted predecessor counts as one swap in the instrumentation
/// counters; the held element is written once per insertion.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    insertion_sort_by(items, T::cmp)
}

pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && is_greater(&mut compare, &items[j - 1], &items[i]) {
            j -= 1;
        }
        if j < i {
            instrumentation::add_swaps((i - j) as u64);
            items[j..=i].rotate_right(1);
        }
    }
}

impl Sorter for InsertionSort {
    const NAME: &'static str = "insertion";
    const STABLE: bool = true;

    fn sort_by<T, F>(&self, mut items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        insertion_sort_by(&mut items, compare);
        items
    }
}
