// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use criterion::{Criterion, criterion_group, criterion_main};
use qst_simulators::{IdealOracle, NoisyOracle, noise_config::NoiseConfig};
use qst_tomography::{Tomography, TwoQubitExpectations, comparator, preparation::singlet};
use std::hint::black_box;

const SEED: u64 = 1000;
const SHOTS: u32 = 1_000;

fn linear_inversion(c: &mut Criterion) {
    let expectations = TwoQubitExpectations::from_fn(|a, b| if a == b { -1.0 } else { 0.0 });
    c.bench_function("two-qubit linear inversion", |b| {
        b.iter(|| black_box(black_box(&expectations).density_matrix()));
    });
}

fn singlet_metrics(c: &mut Criterion) {
    let rho = comparator::singlet_density_matrix();
    c.bench_function("singlet fidelity and trace distance", |b| {
        b.iter(|| {
            black_box(comparator::fidelity(black_box(&rho)));
            black_box(comparator::trace_distance(black_box(&rho)));
        });
    });
}

fn ideal_singlet_tomography(c: &mut Criterion) {
    let preparation = singlet(2);
    let engine = Tomography::new(IdealOracle::new(Some(SEED)));
    c.bench_function("ideal singlet tomography", |b| {
        b.iter(|| {
            black_box(engine.estimate_state_2q(
                &preparation.circuit,
                preparation.alice,
                preparation.bob,
                SHOTS,
            ))
        });
    });
}

fn noisy_singlet_tomography(c: &mut Criterion) {
    let preparation = singlet(2);
    let oracle = NoisyOracle::new(NoiseConfig::reference_device(), Some(SEED))
        .expect("reference device config should be valid");
    let engine = Tomography::new(oracle);
    c.bench_function("noisy singlet tomography", |b| {
        b.iter(|| {
            black_box(engine.estimate_state_2q(
                &preparation.circuit,
                preparation.alice,
                preparation.bob,
                SHOTS,
            ))
        });
    });
}

criterion_group!(
    benches,
    linear_inversion,
    singlet_metrics,
    ideal_singlet_tomography,
    noisy_singlet_tomography
);
criterion_main!(benches);
