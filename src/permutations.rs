// Heap's algorithm.
//
// generate(k) produces every ordering of the first k positions while leaving
// positions k.. alone. It recurses into generate(k - 1), then k - 1 more
// times swaps a new element into position k - 1 and recurses again:
//
//   k odd  -> swap(0, k - 1)
//   k even -> swap(i, k - 1)   for the i-th sibling
//
// Every emitted ordering differs from the previous one by a single swap, and
// there are exactly k! of them. The recursion is k frames deep.
//
// `for_each_permutation` hands each ordering to a visitor that can stop the
// enumeration early; the TSP search uses that to return on the first path
// under budget instead of materialising n! paths.
use std::ops::ControlFlow;

use crate::core::{CombinatoricsConfig, swap};
use crate::error::Result;
use crate::instrumentation;
use crate::numeric::factorial;

/// Visit every permutation of `items` in Heap's order, stopping early if the
/// visitor breaks. `items` is left in whatever order the generator reached.
///
/// An empty slice has exactly one (empty) permutation.
pub fn for_each_permutation<T, B, F>(items: &mut [T], mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    let len = items.len();
    generate(items, len, &mut visit)
}

fn generate<T, B, F>(items: &mut [T], k: usize, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    instrumentation::add_recursive_calls(1);
    if k <= 1 {
        instrumentation::add_candidates(1);
        return visit(items);
    }
    generate(items, k - 1, visit)?;
    for i in 0..k - 1 {
        if k % 2 == 0 {
            swap(items, i, k - 1);
        } else {
            swap(items, 0, k - 1);
        }
        generate(items, k - 1, visit)?;
    }
    ControlFlow::Continue(())
}

/// All n! orderings of `items`, using the default limits.
///
/// Elements are not deduplicated: repeated values give repeated orderings.
pub fn permutations<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    permutations_with_config(&CombinatoricsConfig::default(), items)
}

/// Like [`permutations`], rejecting inputs longer than
/// `config.max_permutation_len`.
pub fn permutations_with_config<T: Clone>(
    config: &CombinatoricsConfig,
    items: &[T],
) -> Result<Vec<Vec<T>>> {
    config.check_len("permutations", items.len(), config.max_permutation_len)?;
    let expected = factorial(items.len());
    log::debug!(
        "permutations: generating {:?} orderings of {} elements",
        expected,
        items.len()
    );

    let capacity = expected.and_then(|n| usize::try_from(n).ok()).unwrap_or(0);
    let mut out = Vec::with_capacity(capacity);
    let mut work = items.to_vec();
    let flow = for_each_permutation(&mut work, |perm| {
        out.push(perm.to_vec());
        ControlFlow::<()>::Continue(())
    });
    debug_assert!(flow.is_continue());
    Ok(out)
}
