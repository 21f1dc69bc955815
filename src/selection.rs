use std::cmp::Ordering;

use crate::core::{Sorter, is_less, swap};

/// Repeatedly swaps the minimum of the unsorted suffix into place.
///
/// Always n(n-1)/2 comparisons but at most n-1 swaps. Not stable: the swap
/// can carry an element past an equal one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

pub fn selection_sort<T: Ord>(items: &mut [T]) {
    selection_sort_by(items, T::cmp)
}

pub fn selection_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    for i in 0..len {
        let mut smallest = i;
        for j in (i + 1)..len {
            if is_less(&mut compare, &items[j], &items[smallest]) {
                smallest = j;
            }
        }
        swap(items, i, smallest);
    }
}

impl Sorter for SelectionSort {
    const NAME: &'static str = "selection";
    const STABLE: bool = false;

    fn sort_by<T, F>(&self, mut items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        selection_sort_by(&mut items, compare);
        items
    }
}
