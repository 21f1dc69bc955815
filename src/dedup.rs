use std::hash::Hash;

use ahash::AHashSet as HashSet;

/// Remove duplicates while keeping the order of first occurrence.
///
/// A hash set of borrowed elements answers "seen before?" and an explicit
/// output list keeps the order, since the set itself has no defined
/// iteration order. One pass, O(n) expected time and O(n) extra space.
///
/// ```
/// use algokit::remove_duplicates;
/// assert_eq!(remove_duplicates(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn remove_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn keeps_first_occurrence_order() {
        assert_eq!(remove_duplicates(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(remove_duplicates(&["b", "a", "b"]), vec!["b", "a"]);
    }

    #[test]
    fn empty_and_unique_inputs() {
        assert_eq!(remove_duplicates::<u8>(&[]), Vec::<u8>::new());
        assert_eq!(remove_duplicates(&[4, 5, 6]), vec![4, 5, 6]);
        assert_eq!(remove_duplicates(&[7, 7, 7]), vec![7]);
    }

    #[quickcheck]
    fn output_is_unique_and_ordered_by_first_occurrence(items: Vec<u8>) -> bool {
        let out = remove_duplicates(&items);
        let unique = out.len() == out.iter().collect::<HashSet<_>>().len();
        let covers = items.iter().all(|x| out.contains(x));
        // the position of each output element in the input must increase
        let firsts: Vec<usize> = out
            .iter()
            .filter_map(|x| items.iter().position(|y| y == x))
            .collect();
        unique && covers && firsts.windows(2).all(|w| w[0] < w[1])
    }
}
