//! Criterion benchmarks for the per-frame knob tint mapping
//!
//! Run with: cargo bench -p crshr-gui-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use crshr_gui_core::{KnobColors, Theme, color_bright, color_mix, intensity};

const CRUSH_VALUES: &[i32] = &[2, 64, 256, 512];

fn bench_intensity(c: &mut Criterion) {
    c.bench_function("intensity/full_range", |b| {
        b.iter(|| {
            for crush in 2..=512 {
                black_box(intensity(black_box(crush)));
            }
        });
    });
}

fn bench_colors(c: &mut Criterion) {
    let theme = Theme::default();
    let mut group = c.benchmark_group("Tint");

    for &crush in CRUSH_VALUES {
        let i = intensity(crush);

        group.bench_with_input(BenchmarkId::new("color_bright", crush), &i, |b, &i| {
            b.iter(|| black_box(color_bright(black_box(theme.green), black_box(i))));
        });

        group.bench_with_input(BenchmarkId::new("color_mix", crush), &i, |b, &i| {
            b.iter(|| {
                black_box(color_mix(
                    black_box(theme.green),
                    black_box(theme.yellow),
                    black_box(i),
                    black_box(62.5),
                ))
            });
        });
    }

    // Everything the panel computes before drawing a frame
    group.bench_function("frame", |b| {
        b.iter(|| {
            let i = intensity(black_box(100));
            black_box(KnobColors::crush(&theme, i));
            black_box(KnobColors::mix(&theme, i, black_box(75.5)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_intensity, bench_colors);
criterion_main!(benches);
