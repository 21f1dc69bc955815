use algokit::fixture::{Shape, generate_sequence, random_distance_matrix};
use algokit::{Algorithm, binary_search, permutations, powerset, remove_duplicates, subset_sum, tsp_feasible};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for shape in [Shape::Random, Shape::Sorted, Shape::NearlySorted] {
        let input = generate_sequence(42, shape, 1_000);
        for algo in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algo.name(), shape.name()),
                &input,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |v| black_box(algo.sort(v)),
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

fn bench_search_and_dedup(c: &mut Criterion) {
    let sorted = generate_sequence(7, Shape::Sorted, 100_000);
    c.bench_function("binary_search/100k", |b| {
        b.iter(|| binary_search(black_box(&77_777), &sorted))
    });
    let few = generate_sequence(7, Shape::FewUnique, 100_000);
    c.bench_function("remove_duplicates/100k", |b| {
        b.iter(|| remove_duplicates(black_box(&few)))
    });
}

fn bench_combinatorics(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinatorics");
    for n in [8usize, 12, 16] {
        let items: Vec<u32> = (0..n as u32).collect();
        group.bench_with_input(BenchmarkId::new("powerset", n), &items, |b, items| {
            b.iter(|| powerset(black_box(items)))
        });
    }
    for n in [5usize, 7, 8] {
        let items: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::new("permutations", n), &items, |b, items| {
            b.iter(|| permutations(black_box(items)))
        });
        let matrix = random_distance_matrix(11, n, 100, true);
        group.bench_with_input(BenchmarkId::new("tsp_infeasible", n), &items, |b, items| {
            b.iter(|| tsp_feasible(black_box(items), &matrix, 1))
        });
    }
    for n in [10usize, 16] {
        let items = vec![1i64; n];
        group.bench_with_input(BenchmarkId::new("subset_sum_miss", n), &items, |b, items| {
            b.iter(|| subset_sum(black_box(items), n as i64 + 1))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sorts, bench_search_and_dedup, bench_combinatorics);
criterion_main!(benches);
