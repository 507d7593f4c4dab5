// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use palisade_buffer::StrBuf;
use palisade_ops::{Search, Text};

fn benchmark_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for chunk_len in [16usize, 256, 4096].iter() {
        let chunk = "x".repeat(*chunk_len);

        group.throughput(Throughput::Bytes(*chunk_len as u64));
        group.bench_with_input(format!("{chunk_len} byte chunk"), &chunk, |b, chunk| {
            let mut buf = StrBuf::new(chunk.len() as u32).expect("Failed to new()");

            b.iter(|| {
                buf.reset();
                buf.append(black_box(format_args!("{chunk}")))
                    .expect("append failed");
            });
        });
    }
    group.finish();
}

fn benchmark_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for hay_len in [256usize, 4096].iter() {
        let mut content = "ab".repeat(hay_len / 2 - 2);
        content.push_str("agus");
        let buf = StrBuf::from_bytes(content.as_bytes()).expect("Failed to from_bytes()");

        group.throughput(Throughput::Bytes(*hay_len as u64));
        group.bench_with_input(format!("{hay_len} byte haystack"), &buf, |b, buf| {
            b.iter(|| buf.find(black_box(b"agus"), 0).expect("pattern missing"));
        });
    }
    group.finish();
}

fn benchmark_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");

    let content = format!("{0}es un test{0}", " ".repeat(500));
    let buf = StrBuf::from_bytes(content.as_bytes()).expect("Failed to from_bytes()");

    group.throughput(Throughput::Bytes(content.len() as u64));
    group.bench_function("padded kilobyte", |b| {
        b.iter(|| black_box(&buf).trim().expect("trim failed"));
    });
    group.finish();
}

criterion_group!(benches, benchmark_append, benchmark_find, benchmark_trim);
criterion_main!(benches);
