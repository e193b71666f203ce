// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rampart_rand::{SystemEntropySource, SystemRandomSession, draw_in_range};

fn benchmark_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_draw");

    group.bench_function("one_shot", |b| {
        b.iter(|| draw_in_range(black_box(0), black_box(1_000)).expect("draw failed"));
    });

    group.bench_function("session", |b| {
        let mut session = SystemRandomSession::new(SystemEntropySource {});

        b.iter(|| {
            session
                .next_in_range(black_box(0), black_box(1_000))
                .expect("draw failed")
        });
    });

    group.bench_function("session_excluding", |b| {
        let mut session = SystemRandomSession::new(SystemEntropySource {});
        let exclude = [100i64, 200, 300];

        b.iter(|| {
            session
                .next_in_range_excluding(black_box(0), black_box(1_000), black_box(&exclude))
                .expect("draw failed")
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_draw);
criterion_main!(benches);
