// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rampart_util::secure_compare;

fn benchmark_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("secure_compare");

    let reference = [0x42u8; 32];
    let equal = reference;
    let mut unequal_first = reference;
    unequal_first[0] ^= 0xFF;
    let mut unequal_last = reference;
    unequal_last[31] ^= 0xFF;

    // The three timings below should be indistinguishable.
    group.bench_function("equal", |b| {
        b.iter(|| secure_compare(black_box(&reference), black_box(Some(&equal))))
    });

    group.bench_function("first_byte_differs", |b| {
        b.iter(|| secure_compare(black_box(&reference), black_box(Some(&unequal_first))))
    });

    group.bench_function("last_byte_differs", |b| {
        b.iter(|| secure_compare(black_box(&reference), black_box(Some(&unequal_last))))
    });

    group.bench_function("absent_incoming", |b| {
        b.iter(|| secure_compare(black_box(&reference), black_box(None)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_compare);
criterion_main!(benches);
