//! Seeded input generators shared by the tests, the benches and the
//! `instrument` binary. The same seed always yields the same data.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::tsp::DistanceMatrix;

/// Input shapes that exercise the best and worst cases of the sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Random,
    Sorted,
    Reversed,
    /// Sorted, then a few random adjacent pairs swapped.
    NearlySorted,
    /// Random values drawn from a handful of distinct keys.
    FewUnique,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Random,
        Shape::Sorted,
        Shape::Reversed,
        Shape::NearlySorted,
        Shape::FewUnique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Random => "random",
            Shape::Sorted => "sorted",
            Shape::Reversed => "reversed",
            Shape::NearlySorted => "nearly-sorted",
            Shape::FewUnique => "few-unique",
        }
    }
}

/// `len` integers laid out according to `shape`.
pub fn generate_sequence(seed: u64, shape: Shape, len: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let upper = i64::try_from(len).unwrap_or(i64::MAX).max(1);
    match shape {
        Shape::Random => (0..len).map(|_| rng.gen_range(-upper..=upper)).collect(),
        Shape::Sorted => (0..upper).take(len).collect(),
        Shape::Reversed => {
            let mut v: Vec<i64> = (0..upper).take(len).collect();
            v.reverse();
            v
        }
        Shape::NearlySorted => {
            let mut v: Vec<i64> = (0..upper).take(len).collect();
            if len > 1 {
                for _ in 0..(len / 20).max(1) {
                    let i = rng.gen_range(0..len - 1);
                    v.swap(i, i + 1);
                }
            }
            v
        }
        Shape::FewUnique => (0..len).map(|_| rng.gen_range(0..4)).collect(),
    }
}

/// `(key, original_index)` pairs with keys drawn at random from `0..keys`.
/// Sorting by key alone and checking that indices still ascend within each
/// key detects unstable sorts.
pub fn keyed_records(seed: u64, len: usize, keys: u8) -> Vec<(u8, usize)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let keys = keys.max(1);
    (0..len).map(|i| (rng.gen_range(0..keys), i)).collect()
}

/// `n` x `n` matrix with a zero diagonal and other costs in `1..=max_cost`.
/// When `symmetric` is set, `cost(i, j) == cost(j, i)`.
pub fn random_distance_matrix(seed: u64, n: usize, max_cost: u64, symmetric: bool) -> DistanceMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_cost = max_cost.max(1);
    let mut costs = vec![vec![0u64; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j || (symmetric && j < i) {
                continue;
            }
            costs[i][j] = rng.gen_range(1..=max_cost);
            if symmetric {
                costs[j][i] = costs[i][j];
            }
        }
    }
    DistanceMatrix::from_fn(n, |i, j| costs[i][j])
}
