//! Criterion benchmarks: reference vs block vs viewport kernels.

use colgemm::{Block, Matrix, Viewport, matmul_block, matmul_naive_jki, matmul_viewport};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn operands(size: usize) -> (Matrix, Matrix) {
    let n = size * size;
    let a = Matrix::from_column_major(size, size, (0..n).map(|i| (i % 100) as f64).collect())
        .unwrap();
    let b = Matrix::from_column_major(size, size, (0..n).map(|i| (i % 7) as f64).collect())
        .unwrap();
    (a, b)
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm");

    for size in [64, 128, 256] {
        let (a, b) = operands(size);
        let mut out = Matrix::zeros(size, size);
        let block = Block::full(size, size);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |bench, &n| {
            bench.iter(|| {
                matmul_naive_jki(&mut out.view_mut(), &a.view(), &b.view(), 0..n);
                black_box(out.as_slice());
            })
        });

        group.bench_with_input(BenchmarkId::new("block", size), &size, |bench, _| {
            bench.iter(|| {
                matmul_block(&mut out.view_mut(), &a.view(), &b.view(), 1.0, &block);
                black_box(out.as_slice());
            })
        });

        for vlen in [8, 30, 128] {
            let id = BenchmarkId::new(format!("viewport_{}", vlen), size);
            group.bench_with_input(id, &size, |bench, _| {
                bench.iter(|| {
                    matmul_viewport(
                        &mut out.view_mut(),
                        &a.view(),
                        &b.view(),
                        1.0,
                        &block,
                        Viewport::new(vlen),
                    );
                    black_box(out.as_slice());
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
