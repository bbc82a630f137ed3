use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use huffman_label::label;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("label");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for base in [2, 8, 32] {
        for num_items in [10, 100, 1000] {
            let freqs = (0..num_items)
                .map(|_| rng.gen_range(0..100))
                .collect::<Vec<i64>>();

            group.bench_with_input(
                BenchmarkId::new(format!("base={base}"), num_items),
                &freqs,
                |b, freqs| {
                    b.iter(|| {
                        let labels = label(base, freqs).unwrap();
                        assert_eq!(labels.len(), freqs.len());
                        labels
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_label);
criterion_main!(benches);
