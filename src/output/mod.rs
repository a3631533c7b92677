//! Output of computed results
//!
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV files for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs
//! ├── visualization/      ← Plots
//! │   ├── config.rs
//! │   ├── functions.rs
//! │   ├── interpolation.rs
//! │   └── trajectory.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! Both halves report failures as [`OutputError`](crate::error::OutputError).

pub mod export;
pub mod visualization;

pub use visualization::{
    PlotConfig, plot_interpolation, plot_linear, plot_quadratic, plot_splines, plot_trajectory,
};

pub use export::{CsvConfig, CsvExporter, CsvMetadata, Exporter, export_samples_csv, export_trajectory_csv};
