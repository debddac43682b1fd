use criterion::{Criterion, black_box, criterion_group, criterion_main};
use threepg_simd::{SimdWidth, exp2_x4, f32x4, log2_x4, pow_const_x4, scalar, simd};

// 10000 values = 2500 f32x4 vectors
const NUM_VECTORS: usize = 2500;
const BATCH_SIZE: usize = NUM_VECTORS * 4;

fn create_test_vectors() -> Vec<f32x4> {
    (0..NUM_VECTORS)
        .map(|i| {
            let base = 0.01 + (i * 4) as f32 * 0.05;
            f32x4::from([base, base + 0.05, base + 0.1, base + 0.15])
        })
        .collect()
}

fn create_test_f32() -> Vec<f32> {
    (0..BATCH_SIZE).map(|i| 0.01 + i as f32 * 0.05).collect()
}

fn bench_log2_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("log2_10k");
    let vectors = create_test_vectors();
    let f32_data = create_test_f32();

    group.bench_function("native_f32x4", |b| {
        b.iter(|| {
            for v in vectors.iter() {
                black_box(log2_x4(*v));
            }
        })
    });

    group.bench_function("f32_slice", |b| {
        let mut values = f32_data.clone();
        b.iter(|| {
            values.copy_from_slice(&f32_data);
            simd::log2_slice(&mut values);
            black_box(&values);
        })
    });

    group.bench_function("scalar_kernel", |b| {
        let mut values = f32_data.clone();
        b.iter(|| {
            values.copy_from_slice(&f32_data);
            for v in values.iter_mut() {
                *v = scalar::log2(*v);
            }
            black_box(&values);
        })
    });

    // Baseline
    group.bench_function("std_log2", |b| {
        let mut values = f32_data.clone();
        b.iter(|| {
            values.copy_from_slice(&f32_data);
            for v in values.iter_mut() {
                *v = v.log2();
            }
            black_box(&values);
        })
    });

    group.finish();
}

fn bench_exp2_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("exp2_10k");
    let powers: Vec<f32> = (0..BATCH_SIZE)
        .map(|i| -60.0 + i as f32 * 0.012)
        .collect();
    let vectors: Vec<f32x4> = powers
        .chunks_exact(4)
        .map(|c| f32x4::from([c[0], c[1], c[2], c[3]]))
        .collect();

    group.bench_function("native_f32x4", |b| {
        b.iter(|| {
            for v in vectors.iter() {
                black_box(exp2_x4(*v));
            }
        })
    });

    group.bench_function("f32_slice", |b| {
        let mut values = powers.clone();
        b.iter(|| {
            values.copy_from_slice(&powers);
            simd::exp2_slice(&mut values);
            black_box(&values);
        })
    });

    group.bench_function("std_exp2", |b| {
        let mut values = powers.clone();
        b.iter(|| {
            values.copy_from_slice(&powers);
            for v in values.iter_mut() {
                *v = v.exp2();
            }
            black_box(&values);
        })
    });

    group.finish();
}

fn bench_pow_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow_10k");
    let vectors = create_test_vectors();
    let f32_data = create_test_f32();

    group.bench_function("native_f32x4", |b| {
        b.iter(|| {
            for v in vectors.iter() {
                black_box(pow_const_x4(*v, 2.4));
            }
        })
    });

    for width in [SimdWidth::Scalar, SimdWidth::Bits128] {
        group.bench_function(format!("width_{}", width), |b| {
            let mut values = f32_data.clone();
            b.iter(|| {
                values.copy_from_slice(&f32_data);
                width.pow_slice(&mut values, 2.4);
                black_box(&values);
            })
        });
    }

    group.bench_function("std_powf", |b| {
        let mut values = f32_data.clone();
        b.iter(|| {
            values.copy_from_slice(&f32_data);
            for v in values.iter_mut() {
                *v = v.powf(2.4);
            }
            black_box(&values);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_log2_10k, bench_exp2_10k, bench_pow_10k);
criterion_main!(benches);
