//! Example: Small utilities and function plots
//!
//! Calls the helpers from `math_utils` and draws a straight line and a
//! parabola with the function plots.

use numlab_rs::{
    grid::SampleRange,
    math_utils::{factorial, pythagoras},
    output::visualization::{plot_linear, plot_quadratic},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Modules and Packages");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== math_utils ======

    println!("pythagoras(3, 4) = {}", pythagoras(3.0, 4.0));
    println!("factorial(5)     = {}", factorial(5)?);
    println!("factorial(20)    = {}", factorial(20)?);

    match factorial(21) {
        Ok(value) => println!("factorial(21)    = {}", value),
        Err(e) => println!("factorial(21)    : {}", e),
    }
    println!();

    // ====== Plots ======

    let tmp_dir = std::env::temp_dir();
    let linear_path = tmp_dir.join("linear.png");
    let quadratic_path = tmp_dir.join("quadratic.png");

    let linear_path = linear_path.to_str().ok_or("non UTF-8 temp path")?;
    let quadratic_path = quadratic_path.to_str().ok_or("non UTF-8 temp path")?;

    // y = 2x + 3 on [0, 10]
    plot_linear(2.0, 3.0, SampleRange::linear_default(), linear_path, None)?;

    // y = x² - 2x + 1 on [-10, 10]
    plot_quadratic(1.0, -2.0, 1.0, SampleRange::quadratic_default(), quadratic_path, None)?;

    println!("Linear plot    : {}", linear_path);
    println!("Quadratic plot : {}", quadratic_path);

    Ok(())
}
