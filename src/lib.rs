//! Classic algorithms as plain functions over in-memory sequences: five
//! comparison sorts behind one [`Sorter`] contract, binary search,
//! order-preserving deduplication, and brute-force combinatorics (powerset,
//! Heap's permutations, subset-sum, traveling-salesman feasibility).
//!
//! Every routine is deterministic and synchronous. Sorts that work in place
//! touch only the buffer they are given. The combinatorial routines are
//! exponential or factorial by nature and refuse inputs above the limits in
//! [`CombinatoricsConfig`]. Work done by any routine can be inspected through
//! the thread-local counters in [`instrumentation`].

pub mod core;
pub mod error;
pub mod fixture;
pub mod instrumentation;
pub mod numeric;

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub mod dedup;
pub mod search;

pub mod permutations;
pub mod powerset;
pub mod subset_sum;
pub mod tsp;

pub use crate::core::{Algorithm, CombinatoricsConfig, Sorter, is_sorted, is_sorted_by};
pub use crate::error::{Error, Result};

pub use crate::bubble::{BubbleSort, bubble_sort, bubble_sort_by};
pub use crate::insertion::{InsertionSort, insertion_sort, insertion_sort_by};
pub use crate::merge::{MergeSort, merge, merge_by, merge_sort, merge_sort_by};
pub use crate::quick::{QuickSort, quick_sort, quick_sort_by, quick_sort_range, quick_sort_range_by};
pub use crate::selection::{SelectionSort, selection_sort, selection_sort_by};

pub use crate::dedup::remove_duplicates;
pub use crate::search::{binary_search, binary_search_by};

pub use crate::permutations::{for_each_permutation, permutations, permutations_with_config};
pub use crate::powerset::{powerset, powerset_with_config};
pub use crate::subset_sum::{subset_sum, subset_sum_reachable, subset_sum_with_config};
pub use crate::tsp::{
    DistanceMatrix, tsp_feasible, tsp_feasible_with_config, tsp_witness, tsp_witness_with_config,
    verify_tsp,
};
