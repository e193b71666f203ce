// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart_rand::{SystemEntropySource, SystemRandomSession, shuffle_with};

fn benchmark_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for len in [16usize, 64, 256, 1024].iter() {
        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(format!("{} elements", len), len, |b, &len| {
            let mut session = SystemRandomSession::new(SystemEntropySource {});
            let mut data: Vec<u32> = (0..len as u32).collect();

            b.iter(|| shuffle_with(black_box(&mut data), &mut session).expect("shuffle failed"));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_shuffle);
criterion_main!(benches);
