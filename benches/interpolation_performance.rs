//! Performance benchmarks for interpolation and time integration
//!
//! # What We're Measuring
//!
//! 1. **Polynomial construction**: divided-difference table, O(n²)
//! 2. **Polynomial evaluation**: Newton form O(n) vs Lagrange form O(n²) per point
//! 3. **Spline construction**: dense LU solve of the moment system
//! 4. **Batch evaluation**: sequential vs Rayon (`parallel` feature)
//! 5. **Forward Euler**: reactor run, cost linear in the number of steps
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench interpolation_performance
//!
//! # Only the evaluation group
//! cargo bench --bench interpolation_performance evaluation
//! ```
//!
//! # Expected Results
//!
//! Lagrange evaluation should grow about n times faster than Newton as the
//! number of support points n increases.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use numlab_rs::grid::linspace;
use numlab_rs::interpolation::{
    CubicSpline, DividedDifferenceTable, Interpolant, LagrangePolynomial, NewtonPolynomial,
    SplineBoundary, set_parallel_threshold,
};
use numlab_rs::models::SemiBatchReactor;
use numlab_rs::ode::{EulerIntegrator, InitialValueProblem, Integrator, TimeGrid};

fn support(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x = linspace(0.0, 1.0, n);
    let y = x.iter().map(|v| (3.0 * v).sin()).collect();
    (x, y)
}

/// Divided-difference table and cubic spline setup for growing n
fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for n in [8, 32, 128].iter() {
        let (x, y) = support(*n);

        group.bench_with_input(BenchmarkId::new("divided_differences", n), n, |b, _| {
            b.iter(|| DividedDifferenceTable::new(black_box(&x), black_box(&y)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("cubic_spline", n), n, |b, _| {
            b.iter(|| {
                CubicSpline::new(black_box(&x), black_box(&y), SplineBoundary::NotAKnot).unwrap()
            })
        });
    }

    group.finish();
}

/// Newton vs Lagrange vs spline on 1000 evaluation points
fn benchmark_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let samples = linspace(0.0, 1.0, 1000);
    group.throughput(Throughput::Elements(samples.len() as u64));

    for n in [4, 16, 64].iter() {
        let (x, y) = support(*n);
        let newton = NewtonPolynomial::new(&x, &y).unwrap();
        let lagrange = LagrangePolynomial::new(&x, &y).unwrap();
        let spline = CubicSpline::new(&x, &y, SplineBoundary::NotAKnot).unwrap();

        group.bench_with_input(BenchmarkId::new("newton", n), n, |b, _| {
            b.iter(|| newton.evaluate_many(black_box(&samples)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("lagrange", n), n, |b, _| {
            b.iter(|| lagrange.evaluate_many(black_box(&samples)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("cubic_spline", n), n, |b, _| {
            b.iter(|| spline.evaluate_many(black_box(&samples)).unwrap())
        });
    }

    group.finish();
}

/// Sequential vs parallel batch evaluation of a Lagrange polynomial
///
/// With the `parallel` feature disabled both variants run sequentially.
fn benchmark_batch_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_threshold");
    let (x, y) = support(32);
    let lagrange = LagrangePolynomial::new(&x, &y).unwrap();
    let samples = linspace(0.0, 1.0, 100_000);
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("sequential", |b| {
        set_parallel_threshold(usize::MAX);
        b.iter(|| lagrange.evaluate_many(black_box(&samples)).unwrap())
    });

    group.bench_function("parallel", |b| {
        set_parallel_threshold(1024);
        b.iter(|| lagrange.evaluate_many(black_box(&samples)).unwrap())
    });

    set_parallel_threshold(4096);
    group.finish();
}

/// Forward Euler on the reactor for growing step counts
fn benchmark_euler_reactor(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler_reactor");
    let problem = InitialValueProblem::new(Box::new(SemiBatchReactor::default()));
    let euler = EulerIntegrator::new();

    for points in [500, 5_000, 50_000].iter() {
        let grid = TimeGrid::new(0.0, 30.0, *points);
        group.throughput(Throughput::Elements(*points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), points, |b, _| {
            b.iter(|| euler.solve(black_box(&problem), black_box(&grid)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_evaluation,
    benchmark_batch_threshold,
    benchmark_euler_reactor,
);
criterion_main!(benches);
