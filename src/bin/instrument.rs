use std::time::Instant;

use algokit::fixture::{Shape, generate_sequence, random_distance_matrix};
use algokit::instrumentation::{counters_snapshot, reset_counters};
use algokit::{Algorithm, CombinatoricsConfig, is_sorted, powerset, subset_sum, tsp_witness};

fn run_sort_case(algo: Algorithm, shape: Shape, len: usize) {
    let input = generate_sequence(42, shape, len);
    reset_counters();
    let t0 = Instant::now();
    let sorted = algo.sort(input);
    let dur = t0.elapsed();
    let c = counters_snapshot();
    assert!(is_sorted(&sorted), "{algo} produced unsorted output");
    println!(
        "{:<10} {:<14} n={} time={:?} comparisons={} swaps={} calls={}",
        algo.name(),
        shape.name(),
        len,
        dur,
        c.comparisons,
        c.swaps,
        c.recursive_calls
    );
}

fn run_combinatorics() {
    let config = CombinatoricsConfig::default();

    for n in [4usize, 8, 12, 16] {
        let items: Vec<u32> = (0..n as u32).collect();
        reset_counters();
        let t0 = Instant::now();
        let subsets = powerset(&items).map(|s| s.len()).unwrap_or(0);
        let c = counters_snapshot();
        println!(
            "powerset     n={} subsets={} time={:?} calls={}",
            n,
            subsets,
            t0.elapsed(),
            c.recursive_calls
        );
    }

    for n in [8usize, 14, 20] {
        // n ones can never sum to n + 1, so the whole tree is walked
        let items = vec![1i64; n];
        reset_counters();
        let t0 = Instant::now();
        let found = subset_sum(&items, n as i64 + 1);
        let c = counters_snapshot();
        println!(
            "subset_sum   n={} found={:?} time={:?} calls={}",
            n,
            found,
            t0.elapsed(),
            c.recursive_calls
        );
    }

    for n in 3..=config.max_permutation_len.min(9) {
        let matrix = random_distance_matrix(7, n, 100, true);
        let cities: Vec<usize> = (0..n).collect();
        reset_counters();
        let t0 = Instant::now();
        // budget 1 is never met, so every ordering is examined
        let witness = tsp_witness(&cities, &matrix, 1);
        let c = counters_snapshot();
        println!(
            "tsp          n={} witness={:?} time={:?} paths={} swaps={}",
            n,
            witness,
            t0.elapsed(),
            c.candidates,
            c.swaps
        );
    }
}

fn main() {
    env_logger::init();

    let len = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(2000);

    for algo in Algorithm::ALL {
        for shape in Shape::ALL {
            run_sort_case(algo, shape, len);
        }
    }
    run_combinatorics();
}
