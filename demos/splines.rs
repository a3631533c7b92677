//! Example: Cubic spline through perturbed sine samples
//!
//! Nine knots on [0, 2π] taken from sin(x), except the value at x = 4.8
//! which is moved to -0.7. The spline passes through every knot, so the
//! perturbation shows up as a local bump against the true function.

use std::f64::consts::PI;

use numlab_rs::{
    functions::sinus,
    grid::linspace,
    interpolation::make_interp_spline,
    output::{
        export::export_samples_csv,
        visualization::{NO_TITLE, PlotConfig, plot_splines},
    },
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Spline Interpolation");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Knots ======

    let x_points = [
        0.0,
        PI / 4.0,
        2.0 * PI / 3.0,
        1.1 * PI,
        4.0 * PI / 3.0,
        4.8,
        5.2,
        1.8 * PI,
        2.0 * PI,
    ];
    let mut y_points: Vec<f64> = x_points.iter().map(|&x| sinus(x)).collect();
    y_points[5] = -0.7;

    println!("Knots:");
    for (x, y) in x_points.iter().zip(y_points.iter()) {
        println!("  ({:.4}, {:+.4})", x, y);
    }
    println!();

    // ====== Spline ======

    let k = 3;
    let spline = make_interp_spline(&x_points, &y_points, k)?;
    let samples = linspace(0.0, 2.0 * PI, 100);
    let values = spline.evaluate_many(&samples)?;
    let truth: Vec<f64> = samples.iter().map(|&x| sinus(x)).collect();

    // ====== Output ======

    let tmp_dir = std::env::temp_dir();
    let plot_path = tmp_dir.join("splines.png");
    let csv_path = tmp_dir.join("splines.csv");

    let plot_path = plot_path.to_str().ok_or("non UTF-8 temp path")?;
    let csv_path = csv_path.to_str().ok_or("non UTF-8 temp path")?;

    plot_splines(
        &x_points,
        &y_points,
        spline.as_ref(),
        k,
        &samples,
        sinus,
        plot_path,
        Some(&PlotConfig::spline(NO_TITLE)),
    )?;

    export_samples_csv(
        &samples,
        &[("spline", values.as_slice()), ("sin", truth.as_slice())],
        csv_path,
        None,
    )?;

    println!("Plot : {}", plot_path);
    println!("CSV  : {}", csv_path);

    Ok(())
}
