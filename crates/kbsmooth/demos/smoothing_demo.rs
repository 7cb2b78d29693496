//! kbsmooth Smoothing Examples
//!
//! This example walks through the main operations:
//! - In-sample smoothing of test functions across bandwidths
//! - Two-stage smoothing onto a query grid
//! - Memoized point estimation
//! - Geodesic smoothing of the two-room function
//!
//! Run with `RUST_LOG=debug` to see the library's log output.

use kbsmooth::functions::{bumpy, step, two_room};
use kbsmooth::graphs::grid_graph;
use kbsmooth::prelude::*;

fn main() -> Result<(), SmoothingError> {
    env_logger::init();

    println!("{}", "=".repeat(80));
    println!("kbsmooth Smoothing Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_bandwidth_sweep()?;
    example_2_two_stage()?;
    example_3_point_estimator()?;
    example_4_geodesic()?;

    Ok(())
}

/// Sum of squared differences.
fn squared_error(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Example 1: Bandwidth Sweep
/// Smooths two test functions in-sample and reports the squared error.
fn example_1_bandwidth_sweep() -> Result<(), SmoothingError> {
    println!("Example 1: Bandwidth Sweep");
    println!("{}", "-".repeat(80));

    let xs: Vec<f64> = (0..=40).map(|i| i as f64 / 40.0).collect();
    let truth_bumpy: Vec<f64> = xs.iter().map(|&x| bumpy(x)).collect();
    let truth_step: Vec<f64> = xs.iter().map(|&x| step(x)).collect();

    println!("{:>10} {:>14} {:>14}", "bandwidth", "bumpy error", "step error");
    for &b in &[0.01, 0.02, 0.05, 0.1, 0.2] {
        let s_bumpy = smooth(&xs, |&x: &f64| bumpy(x), Gaussian, b)?;
        let s_step = smooth(&xs, |&x: &f64| step(x), Gaussian, b)?;
        println!(
            "{:>10.3} {:>14.6} {:>14.6}",
            b,
            squared_error(&s_bumpy, &truth_bumpy),
            squared_error(&s_step, &truth_step)
        );
    }

    println!();
    Ok(())
}

/// Example 2: Two-Stage Smoothing
/// Denoises coarse samples against themselves, then projects onto a finer grid.
fn example_2_two_stage() -> Result<(), SmoothingError> {
    println!("Example 2: Two-Stage Smoothing");
    println!("{}", "-".repeat(80));

    let coarse: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
    let fine: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();
    let estimates = smooth_then_extrapolate(&coarse, |&x: &f64| bumpy(x), &fine, Epanechnikov, 0.15)?;

    println!("{:>8} {:>12} {:>12}", "x", "truth", "estimate");
    for (x, y) in fine.iter().zip(&estimates) {
        println!("{:>8.3} {:>12.5} {:>12.5}", x, bumpy(*x), y);
    }

    println!();
    Ok(())
}

/// Example 3: Point Estimator
/// Queries the same coordinate twice; the value function runs once per sample.
fn example_3_point_estimator() -> Result<(), SmoothingError> {
    println!("Example 3: Point Estimator");
    println!("{}", "-".repeat(80));

    let samples: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
    let mut calls = 0usize;
    let mut estimator = point_estimator(
        &samples,
        |&x: &f64| {
            calls += 1;
            bumpy(x)
        },
        Gaussian,
        0.1,
    )?;

    let first = estimator.evaluate(&0.35)?;
    let second = estimator.evaluate(&0.35)?;
    let other = estimator.evaluate(&0.8)?;
    let cached = estimator.cached_queries();
    drop(estimator);

    println!("m(0.35) = {first:.6} (again: {second:.6})");
    println!("m(0.80) = {other:.6}");
    println!("cached queries: {cached}, value function calls: {calls}");

    println!();
    Ok(())
}

/// Example 4: Geodesic Smoothing
/// Compares Euclidean distance with distance along the edges of a lattice
/// graph on the two-room function.
fn example_4_geodesic() -> Result<(), SmoothingError> {
    println!("Example 4: Geodesic Smoothing");
    println!("{}", "-".repeat(80));

    let n = 9;
    let points: Vec<[f64; 2]> = (0..n)
        .flat_map(|j| (0..n).map(move |i| [i as f64 / (n - 1) as f64, j as f64 / (n - 1) as f64]))
        .collect();
    let graph = grid_graph(n, n);
    let geodesic = GraphMetric::new(&points, &graph, 0.05)?;

    let euclidean = Smoother::new().bandwidth(0.2).build()?;
    let along_graph = Smoother::new().bandwidth(0.2).metric(geodesic).build()?;

    let truth: Vec<f64> = points.iter().map(two_room).collect();
    let e = euclidean.smooth(&points, two_room)?;
    let g = along_graph.smooth(&points, two_room)?;

    println!("Euclidean squared error: {:.6}", squared_error(&e, &truth));
    println!("Geodesic squared error:  {:.6}", squared_error(&g, &truth));

    println!();
    Ok(())
}
