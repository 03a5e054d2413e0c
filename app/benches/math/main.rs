/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fpowf::{PowfOptions, Quiet, powf, powf_with_sink};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::powf(i as f32 / 10., 1. / 2.4));
            }
        })
    });

    c.bench_function("system: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::powf(i as f32 / 10., 1. / 2.4));
            }
        })
    });

    c.bench_function("pxfm: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_powf(i as f32 / 10., 1. / 2.4));
            }
        })
    });

    c.bench_function("fpowf: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(powf(i as f32 / 10., 1. / 2.4));
            }
        })
    });

    c.bench_function("fpowf: powf quiet", |b| {
        let options = PowfOptions {
            report_errors: false,
            report_may_underflow: false,
        };
        b.iter(|| {
            for i in 1..1000 {
                black_box(powf_with_sink(i as f32 / 10., 1. / 2.4, options, &Quiet));
            }
        })
    });

    c.bench_function("fpowf: powf negative base", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(powf(-(i as f32) / 10., 3.));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
