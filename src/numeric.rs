//! Integer counts and sequences that go with the brute-force routines.
//!
//! Counts use `u128` with checked arithmetic. `None` means the exact value
//! does not fit in 128 bits; nothing wraps silently.

use crate::error::{Error, Result};

/// Size of the lowercase latin alphabet assumed by [`guess_count`].
pub const ALPHABET_SIZE: u128 = 26;

/// n!, the number of orderings [`crate::permutations`] produces for n
/// elements. `factorial(0) == Some(1)`; overflows past n = 34.
pub fn factorial(n: usize) -> Option<u128> {
    (2..=n).try_fold(1u128, |acc, k| acc.checked_mul(u128::try_from(k).ok()?))
}

/// 2^n, the number of subsets [`crate::powerset`] produces for n elements.
pub fn powerset_size(n: usize) -> Option<u128> {
    u32::try_from(n).ok().and_then(|n| 1u128.checked_shl(n))
}

/// Number of strings of length 1 to `max_len` over [`ALPHABET_SIZE`]
/// letters, i.e. how many tries a brute-force guesser needs in the worst
/// case.
pub fn guess_count(max_len: u32) -> Option<u128> {
    let mut total = 0u128;
    let mut per_len = 1u128;
    for _ in 0..max_len {
        per_len = per_len.checked_mul(ALPHABET_SIZE)?;
        total = total.checked_add(per_len)?;
    }
    Some(total)
}

/// n-th Fibonacci number, iteratively in O(n). fib(0) = 0, fib(1) = 1;
/// overflows past n = 186.
pub fn fibonacci(n: u32) -> Option<u128> {
    let (mut prev, mut cur) = (0u128, 1u128);
    if n == 0 {
        return Some(prev);
    }
    for _ in 1..n {
        let next = prev.checked_add(cur)?;
        prev = cur;
        cur = next;
    }
    Some(cur)
}

/// Prime factors of `n` in ascending order, with multiplicity, by trial
/// division up to sqrt(n). `prime_factors(1)` is empty; zero has no prime
/// factorisation and is rejected.
pub fn prime_factors(n: u64) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(Error::invalid("zero has no prime factorisation"));
    }
    let mut n = n;
    let mut factors = Vec::new();
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }
    let mut divisor = 3u64;
    // divisor <= sqrt(n), without overflowing divisor * divisor
    while divisor <= n / divisor {
        while n % divisor == 0 {
            factors.push(divisor);
            n /= divisor;
        }
        divisor += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn factorial_values_and_overflow() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(10), Some(3_628_800));
        assert!(factorial(34).is_some());
        assert_eq!(factorial(35), None);
    }

    #[test]
    fn powerset_size_values_and_overflow() {
        assert_eq!(powerset_size(0), Some(1));
        assert_eq!(powerset_size(20), Some(1_048_576));
        assert_eq!(powerset_size(127), Some(1u128 << 127));
        assert_eq!(powerset_size(128), None);
    }

    #[test]
    fn guess_counts() {
        assert_eq!(guess_count(0), Some(0));
        assert_eq!(guess_count(1), Some(26));
        assert_eq!(guess_count(2), Some(26 + 676));
        assert_eq!(guess_count(3), Some(26 + 676 + 17_576));
        assert_eq!(guess_count(100), None);
    }

    #[test]
    fn fibonacci_values_and_overflow() {
        let first: Vec<u128> = (0..10).map(|n| fibonacci(n).unwrap()).collect();
        assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert!(fibonacci(186).is_some());
        assert_eq!(fibonacci(187), None);
    }

    #[test]
    fn prime_factor_examples() {
        assert_eq!(prime_factors(1).unwrap(), Vec::<u64>::new());
        assert_eq!(prime_factors(2).unwrap(), vec![2]);
        assert_eq!(prime_factors(360).unwrap(), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factors(97).unwrap(), vec![97]);
        assert_eq!(prime_factors(u64::MAX).unwrap(), vec![3, 5, 17, 257, 641, 65_537, 6_700_417]);
        assert!(prime_factors(0).is_err());
    }

    #[quickcheck]
    fn prime_factors_multiply_back(n: u32) -> bool {
        let n = u64::from(n).max(1);
        let factors = prime_factors(n).unwrap();
        factors.iter().product::<u64>() == n && factors.windows(2).all(|w| w[0] <= w[1])
    }
}
