use criterion::{black_box, criterion_group, criterion_main, Criterion};
use designmetrics::conformal::{conformity_score, ConformityScorer};
use designmetrics::config::AggregatorConfig;
use designmetrics::data::DescriptorTable;
use designmetrics::descriptors::LargeMoleculeDescriptors;
use designmetrics::metrics::{BatchDescriptorAggregator, ChainCategory, CollectingEventSink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

fn random_sequences(rng: &mut StdRng, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            let len = rng.gen_range(100..130);
            (0..len)
                .map(|_| AMINO_ACIDS[rng.gen_range(0..AMINO_ACIDS.len())] as char)
                .collect()
        })
        .collect()
}

pub fn metrics_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1903);

    let val_log_prob: Vec<f64> = (0..5_000).map(|_| rng.gen_range(-300.0..-100.0)).collect();
    let log_prob: Vec<f64> = (0..1_000).map(|_| rng.gen_range(-300.0..-100.0)).collect();
    c.bench_function("Naive conformity score", |b| {
        b.iter(|| conformity_score(black_box(&log_prob), black_box(&val_log_prob)))
    });
    let scorer = ConformityScorer::new(&val_log_prob);
    c.bench_function("Sorted conformity score", |b| {
        b.iter(|| scorer.score_all(black_box(&log_prob), false))
    });
    c.bench_function("Sorted conformity score parallel", |b| {
        b.iter(|| scorer.score_all(black_box(&log_prob), true))
    });

    let sequences = random_sequences(&mut rng, 200);
    c.bench_function("Large molecule descriptors", |b| {
        b.iter(|| LargeMoleculeDescriptors::from_sequence(black_box(&sequences[0])))
    });

    let batch_seqs: Vec<&str> = sequences[..50].iter().map(|s| s.as_str()).collect();
    let reference_seqs: Vec<&str> = sequences[50..].iter().map(|s| s.as_str()).collect();
    let batch = DescriptorTable::from_sequences(ChainCategory::FvHeavy, &batch_seqs).unwrap();
    let reference = DescriptorTable::from_sequences(ChainCategory::FvHeavy, &reference_seqs).unwrap();

    let mut aggregate = c.benchmark_group("aggregate");
    aggregate.sample_size(50);
    aggregate.measurement_time(Duration::from_secs(10));
    for parallel in [false, true] {
        let aggregator = BatchDescriptorAggregator::new(AggregatorConfig {
            parallel,
            ..AggregatorConfig::default()
        })
        .unwrap();
        let name = if parallel { "aggregate_parallel" } else { "aggregate_sequential" };
        aggregate.bench_function(name, |b| {
            b.iter(|| {
                let sink = CollectingEventSink::new();
                aggregator
                    .aggregate(
                        black_box(&batch),
                        black_box(&reference),
                        ChainCategory::FvHeavy,
                        &sink,
                    )
                    .unwrap()
            })
        });
    }
    aggregate.finish();
}

criterion_group!(benches, metrics_benchmarks);
criterion_main!(benches);
