// Lightweight operation counters for checking complexity claims in tests and
// in the `instrument` dev binary. Thread-local cells keep the hot path free of
// locking and keep concurrently running tests from seeing each other's counts.
use std::cell::Cell;

thread_local! {
    static COMPARISONS: Cell<u64> = const { Cell::new(0) };
    static SWAPS: Cell<u64> = const { Cell::new(0) };
    static RECURSIVE_CALLS: Cell<u64> = const { Cell::new(0) };
    // subsets, permutations or paths looked at by the brute-force routines
    static CANDIDATES: Cell<u64> = const { Cell::new(0) };
}

/// Point-in-time copy of the counters for the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
    pub recursive_calls: u64,
    pub candidates: u64,
}

pub fn reset_counters() {
    COMPARISONS.with(|c| c.set(0));
    SWAPS.with(|c| c.set(0));
    RECURSIVE_CALLS.with(|c| c.set(0));
    CANDIDATES.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        comparisons: COMPARISONS.with(|c| c.get()),
        swaps: SWAPS.with(|c| c.get()),
        recursive_calls: RECURSIVE_CALLS.with(|c| c.get()),
        candidates: CANDIDATES.with(|c| c.get()),
    }
}

pub fn add_comparisons(n: u64) {
    COMPARISONS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_swaps(n: u64) {
    SWAPS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_recursive_calls(n: u64) {
    RECURSIVE_CALLS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_candidates(n: u64) {
    CANDIDATES.with(|c| c.set(c.get().wrapping_add(n)));
}
