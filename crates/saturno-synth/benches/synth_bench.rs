//! Criterion benchmarks for the saturno oscillator
//!
//! Run with: cargo bench
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use saturno_synth::PolyBlepOscillator;

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn bench_fill_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("PolyBlepOscillator");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut osc = PolyBlepOscillator::new(440.0, SAMPLE_RATE);
                let mut output = vec![0.0; block_size];
                b.iter(|| {
                    osc.fill_block(black_box(&mut output));
                    black_box(output[0])
                })
            },
        );
    }

    group.finish();
}

fn bench_fill_block_high_freq(c: &mut Criterion) {
    // Near-Nyquist rates keep the correction branches hot.
    let mut group = c.benchmark_group("PolyBlepOscillator/18kHz");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut osc = PolyBlepOscillator::new(18000.0, SAMPLE_RATE);
                let mut output = vec![0.0; block_size];
                b.iter(|| {
                    osc.fill_block(black_box(&mut output));
                    black_box(output[0])
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fill_block, bench_fill_block_high_freq);
criterion_main!(benches);
