use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::core::{Sorter, is_greater, swap};
use crate::error::{Error, Result};
use crate::instrumentation;

// Pending ranges. Handling the smaller side first keeps at most log2(n)
// entries on the stack, so 32 inline slots cover any realistic slice.
type RangeStack = SmallVec<[(usize, usize); 32]>;

/// Quicksort with a Lomuto partition around the last element of the range.
///
/// O(n log n) on shuffled input, O(n^2) on sorted or reverse-sorted input
/// because the last-element pivot then splits off a single element per
/// round. Not stable. Ranges are processed from an explicit stack rather than
/// by recursion, so stack usage stays O(log n) even in the quadratic case.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

pub fn quick_sort<T: Ord>(items: &mut [T]) {
    quick_sort_by(items, T::cmp)
}

pub fn quick_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() > 1 {
        sort_range(items, 0, items.len() - 1, &mut compare);
    }
}

/// Sort only the closed index range `[low, high]` of `items`, leaving the
/// rest untouched. `low > high` is an empty range and does nothing.
pub fn quick_sort_range<T: Ord>(items: &mut [T], low: usize, high: usize) -> Result<()> {
    quick_sort_range_by(items, low, high, T::cmp)
}

pub fn quick_sort_range_by<T, F>(items: &mut [T], low: usize, high: usize, mut compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if low > high {
        return Ok(());
    }
    if high >= items.len() {
        return Err(Error::invalid(format!(
            "range [{low}, {high}] is out of bounds for a sequence of length {}",
            items.len()
        )));
    }
    sort_range(items, low, high, &mut compare);
    Ok(())
}

fn sort_range<T, F>(items: &mut [T], low: usize, high: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pending = RangeStack::new();
    pending.push((low, high));

    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        instrumentation::add_recursive_calls(1);
        let pivot = partition(items, low, high, compare);

        // the pivot is in its final place and excluded from both sides
        let left = (pivot > low).then(|| (low, pivot - 1));
        let right = (pivot < high).then(|| (pivot + 1, high));
        match (left, right) {
            (Some(l), Some(r)) => {
                if l.1 - l.0 > r.1 - r.0 {
                    pending.push(l);
                    pending.push(r);
                } else {
                    pending.push(r);
                    pending.push(l);
                }
            }
            (Some(side), None) | (None, Some(side)) => pending.push(side),
            (None, None) => {}
        }
    }
}

// Lomuto: everything <= items[high] is moved in front of `store`, then the
// pivot is swapped into `store`, which is returned.
fn partition<T, F>(items: &mut [T], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut store = low;
    for j in low..high {
        if !is_greater(compare, &items[j], &items[high]) {
            swap(items, store, j);
            store += 1;
        }
    }
    swap(items, store, high);
    store
}

impl Sorter for QuickSort {
    const NAME: &'static str = "quick";
    const STABLE: bool = false;

    fn sort_by<T, F>(&self, mut items: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort_by(&mut items, compare);
        items
    }
}
