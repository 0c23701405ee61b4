/// Benchmarks for a single ROI recalculation and a what-if sweep.
///
/// A recalculation runs on every keystroke in the host shell, so it should
/// stay in the sub-microsecond range.
use activation_roi::{ActivationBasis, RoiEngine, ScenarioPreset};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_single_calculation(c: &mut Criterion) {
    let engine = RoiEngine::default();
    let mut group = c.benchmark_group("calculate");

    for preset in ScenarioPreset::ALL {
        let input = preset.input(250.0);
        group.bench_with_input(BenchmarkId::new("preset", preset), &input, |b, input| {
            b.iter(|| engine.calculate(black_box(input)))
        });
    }

    group.finish();
}

fn bench_adoption_sweep(c: &mut Criterion) {
    let engine = RoiEngine::default();
    let base = ScenarioPreset::Typical.input(1_000.0);

    c.bench_function("adoption_sweep_0_to_100", |b| {
        b.iter(|| {
            for entered in 0..=100 {
                let input = base.with_adoption(entered as f64, ActivationBasis::AnyUse);
                black_box(engine.calculate(&input));
            }
        })
    });
}

criterion_group!(benches, bench_single_calculation, bench_adoption_sweep);
criterion_main!(benches);
