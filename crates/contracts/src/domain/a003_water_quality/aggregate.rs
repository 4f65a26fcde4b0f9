use serde::Serialize;

/// Measured water-quality parameter with its safe range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterQualityParameter {
    pub parameter_name: &'static str,
    pub safe_range_description: &'static str,
    pub current_average: f64,
    /// Reference value drawn next to the current level in the bar chart.
    pub safe_limit: f64,
}
