//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Colour of the main curve
/// - `series_colors`: Optional palette for multi-curve plots
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to draw the mesh
///
/// # Example
///
/// ```rust
/// use numlab_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::trajectory("Reactor start-up");
/// config.width = 1280;
/// config.series_colors = Some(vec![BLUE, RGBColor(255, 165, 0)]);
/// assert_eq!(config.xlabel, "time /s");
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 800)
    pub width: u32,

    /// Image height in pixels (default: 600)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "y")
    pub ylabel: String,

    /// Colour of the main curve (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colours for multi-curve plots, one per curve
    ///
    /// If None, uses the default palette: [BLUE, RGB orange, GREEN, RED, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Plot".to_string(),
            xlabel: "x".to_string(),
            ylabel: "y".to_string(),
            line_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// ```rust
/// use numlab_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::spline(NO_TITLE);
/// assert_eq!(config.title, "Spline Interpolation");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    fn titled(title: impl IntoOptionalTitle, fallback: &str) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| fallback.to_string()),
            ..Self::default()
        }
    }

    /// Config for plain function plots (`plot_linear`, `plot_quadratic`)
    ///
    /// Axis labels "x" and "y"; the default title is "Function Plot".
    pub fn function(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Function Plot")
    }

    /// Config for polynomial interpolation plots
    ///
    /// The title doubles as the legend prefix of the interpolant curve.
    pub fn interpolation(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Interpolation")
    }

    /// Config for spline plots, default title "Spline Interpolation"
    pub fn spline(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Spline Interpolation")
    }

    /// Config for ODE trajectories
    ///
    /// Sets xlabel to "time /s", ylabel to "concentration [mol/L]" and the
    /// title to the custom value or "The Forward Euler method".
    pub fn trajectory(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::titled(title, "The Forward Euler method");
        config.xlabel = "time /s".to_string();
        config.ylabel = "concentration [mol/L]".to_string();
        config
    }

    /// Config with a custom palette for multi-curve plots
    pub fn with_series_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.series_colors = Some(colors);
        self
    }

    /// Colour of curve `index`
    ///
    /// Uses custom colours if provided, otherwise falls back to the default palette
    pub(crate) fn get_series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors {
            if index < colors.len() {
                return colors[index];
            }
        }

        const DEFAULT_PALETTE: [RGBColor; 8] = [
            BLUE,
            RGBColor(255, 165, 0), // Orange
            GREEN,
            RED,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(128, 0, 128), // Purple
        ];

        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.show_grid);
    }

    #[test]
    fn test_function_config() {
        assert_eq!(PlotConfig::function(NO_TITLE).title, "Function Plot");
        assert_eq!(PlotConfig::function("Linear Function Plot").title, "Linear Function Plot");
    }

    #[test]
    fn test_interpolation_config_with_string() {
        let title = format!("{} on ln", "Newton");
        let config = PlotConfig::interpolation(title);
        assert_eq!(config.title, "Newton on ln");
        assert_eq!(config.xlabel, "x");
    }

    #[test]
    fn test_trajectory_config_default() {
        let config = PlotConfig::trajectory(NO_TITLE);
        assert_eq!(config.title, "The Forward Euler method");
        assert_eq!(config.xlabel, "time /s");
        assert_eq!(config.ylabel, "concentration [mol/L]");
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), BLUE);
        assert_eq!(config.get_series_color(3), RED);
        assert_eq!(config.get_series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        let config = PlotConfig::default().with_series_colors(vec![RED, GREEN]);
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), GREEN);
        // Past the custom list: default palette
        assert_eq!(config.get_series_color(2), GREEN);
    }
}
