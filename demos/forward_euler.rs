//! Example: Semi-batch reactor integrated with forward Euler
//!
//! A stirred tank initially holds 10 L of A at 1 mol/L. Fresh A at 0.5 mol/L
//! is fed at 0.1 L/s while A converts to B with first-order kinetics.
//!
//! **Model**:
//! - dcA/dt = V̇/V(t)·(cA,in − cA) − k·cA
//! - dcB/dt = k·cA
//! - V(t) = V₀ + V̇·t
//!
//! **Parameters**:
//! - k = 0.2 1/s
//! - V̇ = 0.1 L/s
//! - V₀ = 10 L
//! - cA,in = 0.5 mol/L
//!
//! Run with `RUST_LOG=debug` to see the integrator log.

use numlab_rs::{
    models::{ReactorParameters, SemiBatchReactor},
    ode::{EulerIntegrator, InitialValueProblem, Integrator, TimeGrid},
    output::{
        export::{CsvConfig, CsvMetadata, export_trajectory_csv},
        visualization::{NO_TITLE, PlotConfig, plot_trajectory},
    },
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Semi-batch Reactor - The Forward Euler Method");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Reactor ======

    let parameters = ReactorParameters::default();
    println!("Parameters:");
    println!("  k      : {} 1/s", parameters.rate_constant);
    println!("  V̇      : {} L/s", parameters.feed_rate);
    println!("  V₀     : {} L", parameters.initial_volume);
    println!("  cA,in  : {} mol/L", parameters.feed_concentration);
    println!("  cA(0)  : {} mol/L", parameters.initial_a);
    println!("  cB(0)  : {} mol/L\n", parameters.initial_b);

    let reactor = SemiBatchReactor::new(parameters)?;
    let problem = InitialValueProblem::new(Box::new(reactor));

    // ====== Time grid: 500 points on [0, 30] s ======

    let grid = TimeGrid::new(0.0, 30.0, 500);
    println!("Time grid:");
    println!("  Interval : [{}, {}] s", grid.t_start, grid.t_end);
    println!("  Points   : {}", grid.points);
    println!("  dt       : {:.6} s\n", grid.dt());

    // ====== Integrate ======

    let trajectory = EulerIntegrator::new().solve(&problem, &grid)?;

    if let Some(final_state) = trajectory.final_state() {
        println!("Final state (t = {} s):", grid.t_end);
        for (name, value) in trajectory.component_names.iter().zip(final_state.iter()) {
            println!("  {:<3}: {:.6} mol/L", name, value);
        }
        println!();
    }

    // ====== Output ======

    let tmp_dir = std::env::temp_dir();
    let plot_path = tmp_dir.join("forward_euler.png");
    let csv_path = tmp_dir.join("forward_euler.csv");

    let plot_path = plot_path.to_str().ok_or("non UTF-8 temp path")?;
    let csv_path = csv_path.to_str().ok_or("non UTF-8 temp path")?;

    plot_trajectory(&trajectory, plot_path, Some(&PlotConfig::trajectory(NO_TITLE)))?;

    let csv_config = CsvConfig::default()
        .with_metadata(CsvMetadata::from_trajectory("Semi-batch reactor", &trajectory));
    export_trajectory_csv(&trajectory, csv_path, Some(&csv_config))?;

    println!("Plot : {}", plot_path);
    println!("CSV  : {}", csv_path);

    Ok(())
}
