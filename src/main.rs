//! Benchmark runner for the column-major GEMM kernels.
//!
//! Usage: `colgemm [SIZE ...]`. Sizes default to 256 512 1024. The extra
//! viewport width compared against the fixed ones comes from
//! `COLGEMM_VLEN` (default 30). Set `RUST_LOG=debug` to see the dispatch
//! records from the checked entry points.

use std::env;
use std::process;
use std::time::Instant;

use colgemm::{
    Block, MatMut, MatRef, Matrix, Viewport, matmul_block, matmul_naive_ijk, matmul_naive_jki,
    matmul_viewport, multiply,
};

type Kernel = Box<dyn Fn(&mut MatMut<'_>, &MatRef<'_>, &MatRef<'_>)>;

fn main() {
    let _ = env_logger::try_init();

    let sizes = match env::args()
        .skip(1)
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(v) if !v.is_empty() => v,
        Ok(_) => vec![256, 512, 1024],
        Err(e) => {
            eprintln!("invalid size: {}", e);
            process::exit(2);
        }
    };
    let tuned = match Viewport::from_env() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    println!("=== Column-major GEMM Benchmark ===\n");
    println!("Viewport width under test: {}\n", tuned.width());

    let iterations = 3;
    let mut all_results = Vec::new();

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let (m, n, p) = (size, size, size);
        let a = Matrix::from_column_major(m, p, (0..m * p).map(|i| (i % 100) as f64).collect())
            .unwrap_or_else(|e| fail(e));
        let b = Matrix::from_column_major(p, n, (0..p * n).map(|i| (i % 100) as f64).collect())
            .unwrap_or_else(|e| fail(e));

        let kernels: Vec<(String, Kernel)> = vec![
            (
                "Dot (i-j-k)".to_string(),
                kernel(|c, a, b| matmul_naive_ijk(c, a, b, 1.0)),
            ),
            (
                "Reference (j-k-i)".to_string(),
                kernel(move |c, a, b| matmul_naive_jki(c, a, b, 0..n)),
            ),
            (
                "Block".to_string(),
                kernel(move |c, a, b| matmul_block(c, a, b, 1.0, &Block::full(m, n))),
            ),
            viewport_entry(m, n, Viewport::new(8)),
            viewport_entry(m, n, Viewport::default()),
            viewport_entry(m, n, Viewport::new(128)),
            viewport_entry(m, n, tuned),
        ];

        let mut results = Vec::new();
        for (name, kernel) in kernels {
            let timing = bench_fn(&a, &b, iterations, kernel);
            results.push((name, timing));
        }

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            println!(
                "{}. {:20} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                baseline_time / time_ms
            );
        }
        println!();

        all_results.push((size, results));
    }

    sanity_check();
    print_summary_table(&all_results);
}

fn fail(e: colgemm::GemmError) -> ! {
    eprintln!("{}", e);
    process::exit(1);
}

fn kernel<F>(f: F) -> Kernel
where
    F: Fn(&mut MatMut<'_>, &MatRef<'_>, &MatRef<'_>) + 'static,
{
    Box::new(f)
}

fn viewport_entry(m: usize, n: usize, vp: Viewport) -> (String, Kernel) {
    (
        format!("Viewport vlen={}", vp.width()),
        kernel(move |c, a, b| {
            matmul_viewport(c, a, b, 1.0, &Block::full(m, n), vp)
        }),
    )
}

/// Benchmark one kernel, returns (avg ms, GFLOPS)
fn bench_fn(a: &Matrix, b: &Matrix, iterations: usize, f: Kernel) -> (f64, f64) {
    let (m, p) = a.size();
    let n = b.cols();

    // Warmup
    let mut c = Matrix::zeros(m, n);
    f(&mut c.view_mut(), &a.view(), &b.view());

    // Timed runs
    let mut total = 0.0;
    for _ in 0..iterations {
        let mut c = Matrix::zeros(m, n);
        let start = Instant::now();
        f(&mut c.view_mut(), &a.view(), &b.view());
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * (m * n * p) as f64 / avg / 1e9;
    (avg * 1000.0, gflops)
}

/// Quick identity check through the checked API before printing numbers
fn sanity_check() {
    let a = Matrix::identity(2);
    let b = Matrix::from_column_major(2, 2, vec![2.0, 4.0, 3.0, 5.0]).unwrap_or_else(|e| fail(e));
    let mut c = Matrix::zeros(2, 2);
    if let Err(e) = multiply(&mut c.view_mut(), &a.view(), &b.view(), 1.0) {
        fail(e);
    }
    if c != b {
        eprintln!("sanity check failed: I * B gave\n{}", c);
        process::exit(1);
    }
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(String, (f64, f64))>)]) {
    if all_results.is_empty() {
        return;
    }

    println!("\n{}", "=".repeat(90));
    println!("SUMMARY");
    println!("{}", "=".repeat(90));

    print!("\n{:<22}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}×{}", size, size));
    }
    println!(" {:>12}", "Speedup");
    println!("{}", "-".repeat(90));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = &all_results[0].1[method_idx].0;
        print!("{:<22}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            let baseline_time = results[0].1.0;
            print!(" {:>11.2} GF", gflops);
            speedups.push(baseline_time / time_ms);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>11.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to Dot (i-j-k). Higher is better.\n");
}
