use ahash::AHashSet as HashSet;

use crate::core::CombinatoricsConfig;
use crate::error::Result;
use crate::instrumentation;

/// Is there a subset of `items` summing to `target`? Brute force, using the
/// default limits.
///
/// Recurses from the last element: a remaining target of zero succeeds, an
/// exhausted input fails, an element larger than the remaining target can
/// only be skipped, and anything else branches on skip-or-take. No
/// memoisation, so the worst case is O(2^n). Sums are tracked in `i128` and
/// cannot overflow.
///
/// The skip-only pruning assumes non-negative elements; with negative
/// elements some subsets are never tried.
///
/// ```
/// use algokit::subset_sum;
/// assert!(subset_sum(&[3, 34, 4, 12, 5, 2], 9).unwrap());
/// assert!(!subset_sum(&[3, 34, 4, 12, 5, 2], 30).unwrap());
/// ```
pub fn subset_sum(items: &[i64], target: i64) -> Result<bool> {
    subset_sum_with_config(&CombinatoricsConfig::default(), items, target)
}

/// Like [`subset_sum`], rejecting inputs longer than
/// `config.max_recursion_depth` (the recursion is one frame per element).
pub fn subset_sum_with_config(
    config: &CombinatoricsConfig,
    items: &[i64],
    target: i64,
) -> Result<bool> {
    config.check_len("subset_sum", items.len(), config.max_recursion_depth)?;
    log::debug!(
        "subset_sum: branching over {} elements for target {target}",
        items.len()
    );
    let found = reaches(items, i128::from(target));
    log::trace!("subset_sum: target {target} reachable: {found}");
    Ok(found)
}

fn reaches(items: &[i64], target: i128) -> bool {
    instrumentation::add_recursive_calls(1);
    if target == 0 {
        return true;
    }
    let Some((&last, rest)) = items.split_last() else {
        return false;
    };
    let last = i128::from(last);
    if last > target {
        return reaches(rest, target);
    }
    reaches(rest, target) || reaches(rest, target - last)
}

/// Optimised alternative to [`subset_sum`]: grows the set of reachable sums
/// one element at a time instead of branching.
///
/// Cost is bounded by the number of distinct partial sums rather than 2^n.
/// When every element is non-negative, sums above `target` are dropped. It
/// gives the same answer as [`subset_sum`] on non-negative input and the
/// exact answer for inputs with negative elements too.
pub fn subset_sum_reachable(items: &[i64], target: i64) -> bool {
    let target = i128::from(target);
    if target == 0 {
        return true;
    }
    let bounded = items.iter().all(|&x| x >= 0);
    let mut reachable: HashSet<i128> = HashSet::new();
    reachable.insert(0);
    for &item in items {
        let item = i128::from(item);
        let next: Vec<i128> = reachable
            .iter()
            .map(|sum| sum + item)
            .filter(|sum| !bounded || *sum <= target)
            .collect();
        for sum in next {
            if sum == target {
                return true;
            }
            reachable.insert(sum);
        }
    }
    false
}
