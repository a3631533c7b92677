//! Example: Newton and Lagrange interpolation figures
//!
//! Four figures:
//!
//! 1. Newton on ln at x = 1, 4, 5, 6, sampled on [0.5, 8]
//! 2. Newton on sign at ±0.25, ±0.75, ±1.25, sampled on [-1.5, 1.5]
//! 3. Lagrange on ln at x = 1, 4, 5, 6
//! 4. Lagrange on sign at ±0.26667, ±0.8, sampled on [-0.8, 0.8]
//!
//! The sign figures show the oscillation of a single high-degree polynomial
//! across a jump.

use numlab_rs::{
    functions::{logarithm_natural, sign_fcn},
    grid::linspace,
    interpolation::{
        Interpolant, LagrangePolynomial, NewtonPolynomial, newton_divided_difference_coefficients,
        newton_divided_difference_interpolation,
    },
    output::visualization::{PlotConfig, plot_interpolation},
};

fn support<F: Fn(f64) -> f64>(func: F, x: &[f64]) -> Vec<f64> {
    x.iter().map(|&v| func(v)).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Polynomial Interpolation Figures");
    println!("═══════════════════════════════════════════════════════\n");

    let tmp_dir = std::env::temp_dir();
    let path_for = |name: &str| -> Result<String, Box<dyn std::error::Error>> {
        Ok(tmp_dir
            .join(name)
            .to_str()
            .ok_or("non UTF-8 temp path")?
            .to_string())
    };

    let x_ln = [1.0, 4.0, 5.0, 6.0];
    let y_ln = support(logarithm_natural, &x_ln);

    // ====== 1. Newton on ln ======

    let coefficients = newton_divided_difference_coefficients(&y_ln, &x_ln)?;
    let at_4_5 = newton_divided_difference_interpolation(&coefficients, &x_ln, &[4.5])?;
    println!("Newton coefficients : {:?}", coefficients);
    println!("P(4.5)              = {:.6}  (ln 4.5 = {:.6})\n", at_4_5[0], 4.5f64.ln());

    let newton_ln = NewtonPolynomial::from_coefficients(&coefficients, &x_ln)?;
    plot_interpolation(
        logarithm_natural,
        &newton_ln,
        &linspace(0.5, 8.0, 30),
        &path_for("newton_ln.png")?,
        Some(&PlotConfig::interpolation("Newton's divided-difference interpolation")),
    )?;

    // ====== 2. Newton on sign ======

    let x_sign = [-1.25, -0.75, -0.25, 0.25, 0.75, 1.25];
    let newton_sign = NewtonPolynomial::new(&x_sign, &support(sign_fcn, &x_sign))?;
    println!("Newton on sign, degree {}", newton_sign.degree());

    plot_interpolation(
        sign_fcn,
        &newton_sign,
        &linspace(-1.5, 1.5, 50),
        &path_for("newton_sign.png")?,
        Some(&PlotConfig::interpolation("Newton's divided-difference interpolation")),
    )?;

    // ====== 3. Lagrange on ln ======

    let lagrange_ln = LagrangePolynomial::new(&x_ln, &y_ln)?;
    println!("L(2)                = {:.6}  (ln 2 = {:.6})", lagrange_ln.evaluate(2.0)?, 2f64.ln());

    plot_interpolation(
        logarithm_natural,
        &lagrange_ln,
        &linspace(0.5, 8.0, 30),
        &path_for("lagrange_ln.png")?,
        Some(&PlotConfig::interpolation("Lagrange interpolation")),
    )?;

    // ====== 4. Lagrange on sign ======

    let x_sign = [-0.8, -0.26667, 0.26667, 0.8];
    let lagrange_sign = LagrangePolynomial::new(&x_sign, &support(sign_fcn, &x_sign))?;

    plot_interpolation(
        sign_fcn,
        &lagrange_sign,
        &linspace(-0.8, 0.8, 100),
        &path_for("lagrange_sign.png")?,
        Some(&PlotConfig::interpolation("Lagrange interpolation")),
    )?;

    println!("\nFigures written to {}", tmp_dir.display());

    Ok(())
}
