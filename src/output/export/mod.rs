//! Data export
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the file format. Each format lives in its
//! own sub-module and implements the trait; [`CsvExporter`] is the one
//! shipped today.
//!
//! | Format | Module  |
//! |--------|---------|
//! | CSV    | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use numlab_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::new(CsvConfig::high_precision());
//!
//! let x = [0.0, 0.5, 1.0];
//! let y = [1.0, 1.5, 2.0];
//! exporter.export_samples(&x, &[("y", &y[..])], "line.csv")?;
//! # Ok::<(), numlab_rs::error::OutputError>(())
//! ```

pub mod csv;

pub use csv::{
    CsvConfig, CsvMetadata, export_samples_csv, export_trajectory_csv, write_samples_csv,
    write_trajectory_csv,
};

use crate::error::OutputError;
use crate::ode::Trajectory;

/// Abstraction over export formats
///
/// # Associated type `Error`
///
/// Each format reports its own error type, so callers can react to format
/// specific failures without downcasting.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Export an ODE trajectory: a time column and one column per component.
    fn export_trajectory(&self, trajectory: &Trajectory, path: &str) -> Result<(), Self::Error>;

    /// Export sampled data: an abscissa column and named value columns.
    fn export_samples(
        &self,
        x: &[f64],
        columns: &[(&str, &[f64])],
        path: &str,
    ) -> Result<(), Self::Error>;
}

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    /// Formatting options applied to every export
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with the given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = OutputError;

    fn export_trajectory(&self, trajectory: &Trajectory, path: &str) -> Result<(), OutputError> {
        export_trajectory_csv(trajectory, path, Some(&self.config))
    }

    fn export_samples(
        &self,
        x: &[f64],
        columns: &[(&str, &[f64])],
        path: &str,
    ) -> Result<(), OutputError> {
        export_samples_csv(x, columns, path, Some(&self.config))
    }
}
