use std::ops::ControlFlow;

use crate::core::CombinatoricsConfig;
use crate::error::{Error, Result};
use crate::numeric::factorial;
use crate::permutations::for_each_permutation;

/// Square table of travel costs, `cost(i, j)` being the cost of going from
/// city `i` to city `j`. The table may be asymmetric. Costs are unsigned, so
/// they are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    costs: Vec<Vec<u64>>,
}

impl DistanceMatrix {
    /// Validate that `costs` is square.
    pub fn new(costs: Vec<Vec<u64>>) -> Result<Self> {
        let n = costs.len();
        if let Some((row, cols)) = costs
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, cols)| cols != n)
        {
            return Err(Error::invalid(format!(
                "distance matrix is not square: row {row} has {cols} columns, expected {n}"
            )));
        }
        Ok(DistanceMatrix { costs })
    }

    /// Build an `n` x `n` matrix from a cost function of `(from, to)`.
    pub fn from_fn<F>(n: usize, mut cost: F) -> Self
    where
        F: FnMut(usize, usize) -> u64,
    {
        let costs = (0..n).map(|i| (0..n).map(|j| cost(i, j)).collect()).collect();
        DistanceMatrix { costs }
    }

    /// Number of cities the matrix covers.
    pub fn dimension(&self) -> usize {
        self.costs.len()
    }

    pub fn cost(&self, from: usize, to: usize) -> Option<u64> {
        self.costs.get(from)?.get(to).copied()
    }

    /// Sum of the legs between consecutive cities of `path`, with no leg
    /// back to the start. Saturates at `u64::MAX`.
    pub fn path_cost(&self, path: &[usize]) -> Result<u64> {
        if let Some(&city) = path.iter().find(|&&c| c >= self.dimension()) {
            return Err(Error::invalid(format!(
                "city {city} is outside a {n}x{n} distance matrix",
                n = self.dimension()
            )));
        }
        Ok(self.path_cost_unchecked(path))
    }

    // every index in `path` must already be known to be in range
    fn path_cost_unchecked(&self, path: &[usize]) -> u64 {
        path.windows(2)
            .map(|leg| self.costs[leg[0]][leg[1]])
            .fold(0, u64::saturating_add)
    }
}

impl TryFrom<Vec<Vec<u64>>> for DistanceMatrix {
    type Error = Error;

    fn try_from(costs: Vec<Vec<u64>>) -> Result<Self> {
        DistanceMatrix::new(costs)
    }
}

/// Is there an ordering of `cities` whose path cost is strictly below
/// `budget`? Brute force over all n! orderings, default limits.
///
/// ```
/// use algokit::{DistanceMatrix, tsp_feasible};
/// let matrix = DistanceMatrix::new(vec![
///     vec![0, 10, 25],
///     vec![10, 0, 10],
///     vec![25, 10, 0],
/// ]).unwrap();
/// assert!(tsp_feasible(&[0, 1, 2], &matrix, 21).unwrap());
/// assert!(!tsp_feasible(&[0, 1, 2], &matrix, 19).unwrap());
/// ```
pub fn tsp_feasible(cities: &[usize], matrix: &DistanceMatrix, budget: u64) -> Result<bool> {
    tsp_feasible_with_config(&CombinatoricsConfig::default(), cities, matrix, budget)
}

pub fn tsp_feasible_with_config(
    config: &CombinatoricsConfig,
    cities: &[usize],
    matrix: &DistanceMatrix,
    budget: u64,
) -> Result<bool> {
    Ok(tsp_witness_with_config(config, cities, matrix, budget)?.is_some())
}

/// First ordering of `cities` (in Heap's order) whose path cost is strictly
/// below `budget`, or `None` when no ordering qualifies.
pub fn tsp_witness(
    cities: &[usize],
    matrix: &DistanceMatrix,
    budget: u64,
) -> Result<Option<Vec<usize>>> {
    tsp_witness_with_config(&CombinatoricsConfig::default(), cities, matrix, budget)
}

pub fn tsp_witness_with_config(
    config: &CombinatoricsConfig,
    cities: &[usize],
    matrix: &DistanceMatrix,
    budget: u64,
) -> Result<Option<Vec<usize>>> {
    if cities.is_empty() {
        return Err(Error::invalid("tsp needs at least one city"));
    }
    config.check_len("tsp", cities.len(), config.max_permutation_len)?;
    if let Some(&max_city) = cities.iter().max() {
        if max_city >= matrix.dimension() {
            return Err(Error::invalid(format!(
                "city {max_city} needs a matrix of dimension {}, got {}",
                max_city + 1,
                matrix.dimension()
            )));
        }
    }

    log::debug!(
        "tsp: searching {:?} orderings of {} cities under budget {budget}",
        factorial(cities.len()),
        cities.len()
    );
    let mut path = cities.to_vec();
    let flow = for_each_permutation(&mut path, |candidate| {
        if matrix.path_cost_unchecked(candidate) < budget {
            ControlFlow::Break(candidate.to_vec())
        } else {
            ControlFlow::Continue(())
        }
    });

    match flow {
        ControlFlow::Break(witness) => {
            log::trace!("tsp: path {witness:?} is under budget {budget}");
            Ok(Some(witness))
        }
        ControlFlow::Continue(()) => {
            log::debug!("tsp: no ordering is under budget {budget}");
            Ok(None)
        }
    }
}

/// Check a given path in O(n): is its cost strictly below `budget`?
pub fn verify_tsp(matrix: &DistanceMatrix, budget: u64, path: &[usize]) -> Result<bool> {
    Ok(matrix.path_cost(path)? < budget)
}
