//! Static series behind the three dashboard charts.

use crate::shared::dataset::{DISEASES, WATER_QUALITY_PARAMETERS};

pub const PALETTE: [&str; 4] = ["#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5"];

pub const MONTH_LABELS: [&str; 9] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep"];

/// Monthly case counts per disease, in the order of `DISEASES`.
pub const DISEASE_TREND: [[f64; 9]; 4] = [
    [1200.0, 1350.0, 1580.0, 1420.0, 1650.0, 1580.0, 1720.0, 1680.0, 1580.0],
    [180.0, 220.0, 245.0, 210.0, 280.0, 245.0, 290.0, 270.0, 245.0],
    [520.0, 480.0, 420.0, 450.0, 380.0, 420.0, 360.0, 390.0, 420.0],
    [95.0, 110.0, 120.0, 105.0, 130.0, 120.0, 125.0, 115.0, 120.0],
];

pub const WEEK_LABELS: [&str; 6] = ["Week 1", "Week 2", "Week 3", "Week 4", "Week 5", "Week 6"];

pub const PREDICTED_CASES: [f64; 6] = [2365.0, 2580.0, 2750.0, 2900.0, 3100.0, 3250.0];

pub const CURRENT_TREND: [f64; 6] = [2365.0, 2420.0, 2480.0, 2540.0, 2600.0, 2660.0];

pub fn disease_names() -> Vec<&'static str> {
    DISEASES.iter().map(|d| d.name).collect()
}

pub fn water_parameter_labels() -> Vec<&'static str> {
    WATER_QUALITY_PARAMETERS
        .iter()
        .map(|p| p.parameter_name)
        .collect()
}

pub fn water_current_levels() -> Vec<f64> {
    WATER_QUALITY_PARAMETERS
        .iter()
        .map(|p| p.current_average)
        .collect()
}

pub fn water_safe_limits() -> Vec<f64> {
    WATER_QUALITY_PARAMETERS.iter().map(|p| p.safe_limit).collect()
}

/// Appends a two-digit hex alpha to a `#RRGGBB` colour.
pub fn with_alpha(color: &str, alpha_hex: &str) -> String {
    format!("{}{}", color, alpha_hex)
}
