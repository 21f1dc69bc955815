use crate::core::CombinatoricsConfig;
use crate::error::Result;
use crate::instrumentation;
use crate::numeric::powerset_size;

/// All 2^n subsets of `items`, using the default limits.
///
/// The powerset of the tail is built first; each of its subsets is then
/// emitted twice, once with the head prepended and once as is. Nothing is
/// sorted, deduplicated or memoised: repeated input elements give repeated
/// subsets, and the cost is exponential on purpose.
///
/// ```
/// use algokit::powerset;
/// assert_eq!(
///     powerset(&[1, 2]).unwrap(),
///     vec![vec![1, 2], vec![2], vec![1], vec![]]
/// );
/// ```
pub fn powerset<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    powerset_with_config(&CombinatoricsConfig::default(), items)
}

/// Like [`powerset`], rejecting inputs longer than `config.max_powerset_len`.
pub fn powerset_with_config<T: Clone>(
    config: &CombinatoricsConfig,
    items: &[T],
) -> Result<Vec<Vec<T>>> {
    config.check_len("powerset", items.len(), config.max_powerset_len)?;
    log::debug!(
        "powerset: expanding {} elements into {:?} subsets",
        items.len(),
        powerset_size(items.len())
    );
    let subsets = expand(items);
    instrumentation::add_candidates(subsets.len() as u64);
    Ok(subsets)
}

fn expand<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    instrumentation::add_recursive_calls(1);
    let Some((head, tail)) = items.split_first() else {
        return vec![Vec::new()];
    };
    let subsets = expand(tail);
    let mut out = Vec::with_capacity(subsets.len() * 2);
    for subset in subsets {
        let mut with_head = Vec::with_capacity(subset.len() + 1);
        with_head.push(head.clone());
        with_head.extend_from_slice(&subset);
        out.push(with_head);
        out.push(subset);
    }
    out
}
