//! CSV export for trajectories and sampled curves
//!
//! CSV files open in spreadsheets, pandas, MATLAB and most analysis tools.
//!
//! # Features
//!
//! - **Trajectories**: `time` column plus one column per ODE component
//! - **Samples**: `x` column plus any number of named value columns
//! - **Metadata**: optional `#` comment header with an RFC 3339 timestamp
//! - **Locale**: configurable delimiter and decimal separator
//! - **Validation**: empty data, mismatched lengths, NaN/Inf
//!
//! # Example
//!
//! ```rust,no_run
//! use numlab_rs::output::export::{export_samples_csv, CsvConfig, CsvMetadata};
//!
//! let x = vec![0.0, 0.5, 1.0];
//! let spline = vec![0.0, 0.48, 0.84];
//! let truth = vec![0.0, 0.479, 0.841];
//!
//! let config = CsvConfig::default()
//!     .precision(4)
//!     .with_metadata(CsvMetadata::new("Spline vs sin").method("Cubic spline"));
//!
//! export_samples_csv(
//!     &x,
//!     &[("spline", spline.as_slice()), ("sin", truth.as_slice())],
//!     "spline.csv",
//!     Some(&config),
//! )?;
//! # Ok::<(), numlab_rs::error::OutputError>(())
//! ```
//!
//! **Output** (`spline.csv`):
//! ```text
//! # numlab-rs data export
//! # Generated: 2026-10-15T09:30:00+00:00
//! # Title: Spline vs sin
//! # Method: Cubic spline
//! #
//! x,spline,sin
//! 0.0000,0.0000,0.0000
//! 0.5000,0.4800,0.4790
//! 1.0000,0.8400,0.8410
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::OutputError;
use crate::ode::Trajectory;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add `#` header comments
/// - `metadata`: Metadata to include
/// - `time_header`: Header of the time column (default: "time")
/// - `x_header`: Header of the abscissa column for samples (default: "x")
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the time column in trajectory exports (default: "time")
    pub time_header: String,

    /// Header of the abscissa column in sample exports (default: "x")
    pub x_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "time".to_string(),
            x_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon delimiter, comma decimal separator)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Check that numbers and columns stay distinguishable
    ///
    /// The delimiter must differ from the decimal separator and must not be
    /// the quote character or a line break.
    pub fn validate(&self) -> Result<(), OutputError> {
        if self.delimiter == self.decimal_separator {
            return Err(OutputError::InvalidConfiguration(format!(
                "delimiter '{}' equals the decimal separator",
                self.delimiter
            )));
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(OutputError::InvalidConfiguration(format!(
                "{:?} cannot be used as delimiter",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set appear in the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvMetadata {
    /// Dataset title
    pub title: Option<String>,

    /// Numerical method (e.g. "Forward Euler", "Cubic spline")
    pub method: Option<String>,

    /// Number of data rows
    pub points: Option<usize>,

    /// Additional key/value pairs, written in order
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Builder pattern: set the method name
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Metadata taken from an integrator run
    ///
    /// The `solver` entry becomes the method; the remaining entries are
    /// copied as custom pairs in key order.
    pub fn from_trajectory(title: impl Into<String>, trajectory: &Trajectory) -> Self {
        let mut custom: Vec<(String, String)> = trajectory
            .metadata
            .iter()
            .filter(|(key, _)| key.as_str() != "solver")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        custom.sort();

        Self {
            title: Some(title.into()),
            method: trajectory.metadata.get("solver").cloned(),
            points: Some(trajectory.len()),
            custom,
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> Result<(), OutputError> {
    writeln!(writer, "# numlab-rs data export")?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(title) = &metadata.title {
        writeln!(writer, "# Title: {}", title)?;
    }
    if let Some(method) = &metadata.method {
        writeln!(writer, "# Method: {}", method)?;
    }
    if let Some(points) = metadata.points {
        writeln!(writer, "# Points: {}", points)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn write_row<W: Write>(
    writer: &mut W,
    values: impl Iterator<Item = f64>,
    config: &CsvConfig,
) -> Result<(), OutputError> {
    let row: Vec<String> = values.map(|v| format_number(v, config)).collect();
    writeln!(writer, "{}", row.join(&config.delimiter.to_string()))?;
    Ok(())
}

fn write_header<W: Write>(
    writer: &mut W,
    columns: impl Iterator<Item = String>,
    config: &CsvConfig,
) -> Result<(), OutputError> {
    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(writer, metadata)?;
        }
    }

    let header: Vec<String> = columns.map(|name| quote_field(&name, config.delimiter)).collect();
    writeln!(writer, "{}", header.join(&config.delimiter.to_string()))?;
    Ok(())
}

/// Quote a header field holding the delimiter, a quote or a line break
///
/// Embedded quotes are doubled.
fn quote_field(field: &str, delimiter: char) -> String {
    if field.contains(|c: char| c == delimiter || c == '"' || c == '\n' || c == '\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// =============================================================================
// Writers
// =============================================================================

/// Write `trajectory` as CSV into any writer
///
/// Header `time,<component…>`, then one row per time point.
pub fn write_trajectory_csv<W: Write>(
    writer: &mut W,
    trajectory: &Trajectory,
    config: &CsvConfig,
) -> Result<(), OutputError> {

    // ============================= Validation =============================

    config.validate()?;

    if trajectory.is_empty() {
        return Err(OutputError::EmptyData("trajectory has no time points".to_string()));
    }

    if trajectory.times.len() != trajectory.states.len() {
        return Err(OutputError::LengthMismatch(format!(
            "{} time points versus {} states",
            trajectory.times.len(),
            trajectory.states.len()
        )));
    }

    let dimension = trajectory.component_names.len();
    for (step, state) in trajectory.states.iter().enumerate() {
        if state.len() != dimension {
            return Err(OutputError::LengthMismatch(format!(
                "state {} has {} components, expected {}",
                step,
                state.len(),
                dimension
            )));
        }
        if let Some(k) = state.iter().position(|v| !v.is_finite()) {
            return Err(OutputError::NonFinite(format!(
                "component {} at step {}",
                trajectory.component_names[k], step
            )));
        }
    }

    if trajectory.times.iter().any(|t| !t.is_finite()) {
        return Err(OutputError::NonFinite("time points".to_string()));
    }

    // ============================= Write ==================================

    write_header(
        writer,
        std::iter::once(config.time_header.clone()).chain(trajectory.component_names.iter().cloned()),
        config,
    )?;

    for (t, state) in trajectory.times.iter().zip(trajectory.states.iter()) {
        write_row(writer, std::iter::once(*t).chain(state.iter().copied()), config)?;
    }

    Ok(())
}

/// Write sampled columns as CSV into any writer
///
/// Header `x,<name…>`, then one row per abscissa.
pub fn write_samples_csv<W: Write>(
    writer: &mut W,
    x: &[f64],
    columns: &[(&str, &[f64])],
    config: &CsvConfig,
) -> Result<(), OutputError> {

    // ============================= Validation =============================

    config.validate()?;

    if x.is_empty() || columns.is_empty() {
        return Err(OutputError::EmptyData(
            "x and value columns must not be empty".to_string(),
        ));
    }

    if x.iter().any(|v| !v.is_finite()) {
        return Err(OutputError::NonFinite("x column".to_string()));
    }

    for (name, values) in columns {
        if values.len() != x.len() {
            return Err(OutputError::LengthMismatch(format!(
                "column [{}] has {} values versus {} x-values",
                name,
                values.len(),
                x.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(OutputError::NonFinite(format!("column {}", name)));
        }
    }

    // ============================= Write ==================================

    write_header(
        writer,
        std::iter::once(config.x_header.clone()).chain(columns.iter().map(|(name, _)| name.to_string())),
        config,
    )?;

    for (i, &xi) in x.iter().enumerate() {
        write_row(
            writer,
            std::iter::once(xi).chain(columns.iter().map(|(_, values)| values[i])),
            config,
        )?;
    }

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a trajectory to a CSV file
///
/// # Errors
///
/// - Empty trajectory
/// - States whose length differs from the component names
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_trajectory_csv(&trajectory, "reactor.csv", None)?;
/// ```
pub fn export_trajectory_csv(
    trajectory: &Trajectory,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), OutputError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // Validate into memory first so a failed export leaves no file behind
    let mut buffer = Vec::new();
    write_trajectory_csv(&mut buffer, trajectory, configuration)?;

    let mut file = BufWriter::new(File::create(output_path)?);
    file.write_all(&buffer)?;
    file.flush()?;

    log::debug!("Exported {} rows to {}", trajectory.len(), output_path);
    Ok(())
}

/// Export an x column and named value columns to a CSV file
///
/// # Errors
///
/// - Empty x or no value columns
/// - Column lengths differing from `x`
/// - NaN or Inf values
/// - File creation errors
pub fn export_samples_csv(
    x: &[f64],
    columns: &[(&str, &[f64])],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), OutputError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut buffer = Vec::new();
    write_samples_csv(&mut buffer, x, columns, configuration)?;

    let mut file = BufWriter::new(File::create(output_path)?);
    file.write_all(&buffer)?;
    file.flush()?;

    log::debug!("Exported {} rows to {}", x.len(), output_path);
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
