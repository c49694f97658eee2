//! Benchmarks for the sync builder and entrainment integrator.
//!
//! Run:
//! - cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vvsim::core::sync::build_sync_profile;
use vvsim::{OscillatorParams, ResettingMode, Utterance, simulate};

const GROUP_COUNTS: [usize; 4] = [2, 16, 128, 1024];

fn build_utterance(groups: usize) -> Utterance {
    let units: Vec<u32> = (0..groups).map(|i| 2 + (i % 5) as u32).collect();
    let amps: Vec<f64> = (0..groups).map(|i| 0.5 + 0.1 * (i % 7) as f64).collect();
    Utterance::new(&units, &amps, 2).expect("valid bench utterance")
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    group.sample_size(50);

    for mode in ResettingMode::ALL {
        let params = OscillatorParams {
            resetting: mode,
            ..OscillatorParams::default()
        };
        for &n in &GROUP_COUNTS {
            let utt = build_utterance(n);
            let id = BenchmarkId::new(mode.as_str(), format!("sg{n}"));
            group.bench_with_input(id, &utt, |b, utt| {
                b.iter(|| black_box(simulate(black_box(&params), black_box(utt))));
            });
        }
    }

    group.finish();
}

fn bench_sync_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_profile");
    for &n in &GROUP_COUNTS {
        let utt = build_utterance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &utt, |b, utt| {
            b.iter(|| black_box(build_sync_profile(black_box(utt), 0.78, 0.165)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulate, bench_sync_profile);
criterion_main!(benches);
