use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rollmed::{MovingMedian, SelectionMedian, SortedDequeMedian, SortedVecMedian};

const INPUT_LEN: usize = 16_384;

fn random_input(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

// Sweep the window-size ladder over all three strategies. The interesting
// comparison is incremental update vs full re-selection, and Vec vs VecDeque
// shifting cost, as the window grows.
fn bench_strategies(c: &mut Criterion) {
    let input = random_input(INPUT_LEN);

    let mut group = c.benchmark_group("moving_median");
    group.throughput(Throughput::Elements(INPUT_LEN as u64));

    for window_size in [3usize, 9, 33, 129, 513] {
        group.bench_with_input(
            BenchmarkId::new("selection", window_size),
            &window_size,
            |b, &w| {
                let mut filter = SelectionMedian::new(w);
                b.iter(|| black_box(filter.filter(black_box(&input))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sorted_vec", window_size),
            &window_size,
            |b, &w| {
                let mut filter = SortedVecMedian::new(w);
                b.iter(|| black_box(filter.filter(black_box(&input))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sorted_deque", window_size),
            &window_size,
            |b, &w| {
                let mut filter = SortedDequeMedian::new(w);
                b.iter(|| black_box(filter.filter(black_box(&input))));
            },
        );
    }

    group.finish();
}

// Integer samples take a different comparison path than floats; make sure
// the incremental variant is measured on both.
fn bench_integer_samples(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let input: Vec<i64> = (0..INPUT_LEN).map(|_| rng.gen()).collect();

    let mut group = c.benchmark_group("moving_median_i64");
    group.throughput(Throughput::Elements(INPUT_LEN as u64));

    for window_size in [9usize, 129] {
        group.bench_with_input(
            BenchmarkId::new("sorted_vec", window_size),
            &window_size,
            |b, &w| {
                let mut filter = SortedVecMedian::new(w);
                b.iter(|| black_box(filter.filter(black_box(&input))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_integer_samples);
criterion_main!(benches);
