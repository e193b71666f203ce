// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart_digest::{DigestAlgorithm, DigestEncoding, digest_encoded};

fn benchmark_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest_sha256_hex");

    for size in [64usize, 1024, 16_384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let data = vec![0xabu8; size];

            b.iter(|| {
                digest_encoded(
                    black_box(&data),
                    DigestAlgorithm::Sha256,
                    DigestEncoding::Hex,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_digest);
criterion_main!(benches);
