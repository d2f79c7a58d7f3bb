// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for card face rendering. Composition is the batch
// driver's hot path, so this tracks a full front+back render of one record.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use dnigen_render::CardRenderer;

/// Benchmark a full front+back composition of a representative record.
///
/// The record is generated once from a fixed seed so every iteration renders
/// identical content; the per-iteration RNG drives only the barcode pattern.
fn bench_render_pair(c: &mut Criterion) {
    let record = dnigen_identity::generate(&mut StdRng::seed_from_u64(42));
    let renderer = CardRenderer::new();

    c.bench_function("render front+back (856x540)", |b| {
        b.iter(|| {
            let front = renderer.render_front(black_box(&record));
            let mut rng = StdRng::seed_from_u64(7);
            let back = renderer.render_back(black_box(&record), &mut rng);
            black_box((front, back));
        });
    });
}

criterion_group!(benches, bench_render_pair);
criterion_main!(benches);
