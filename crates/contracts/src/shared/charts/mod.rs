//! Chart slots and the configuration each slot is built from.

pub mod config;
pub mod series;

pub use config::{ChartConfig, ChartData, ChartKind, ChartOptions, ColorSpec, SeriesDataset};

use crate::system::session::ScreenId;
use config::{LegendOptions, PluginOptions, TooltipOptions};
use serde::Serialize;
use series::*;

/// Display slot that can hold at most one chart widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChartSlot {
    DiseaseTrend,
    WaterQuality,
    Prediction,
}

impl ChartSlot {
    pub fn all() -> [ChartSlot; 3] {
        [
            ChartSlot::DiseaseTrend,
            ChartSlot::WaterQuality,
            ChartSlot::Prediction,
        ]
    }

    /// DOM id of the `<canvas>` the widget is drawn into.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartSlot::DiseaseTrend => "disease-chart",
            ChartSlot::WaterQuality => "water-quality-chart",
            ChartSlot::Prediction => "prediction-chart",
        }
    }

    /// Screen whose first activation builds the widget.
    pub fn screen(&self) -> ScreenId {
        match self {
            ChartSlot::DiseaseTrend => ScreenId::HealthOfficialDashboard,
            ChartSlot::WaterQuality => ScreenId::WaterQualityView,
            ChartSlot::Prediction => ScreenId::PredictionsView,
        }
    }

    pub fn for_screen(screen: ScreenId) -> Option<ChartSlot> {
        ChartSlot::all().into_iter().find(|s| s.screen() == screen)
    }

    pub fn config(&self) -> ChartConfig {
        match self {
            ChartSlot::DiseaseTrend => disease_trend_config(),
            ChartSlot::WaterQuality => water_quality_config(),
            ChartSlot::Prediction => prediction_config(),
        }
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn line(label: &str, data: &[f64], color: &str) -> SeriesDataset {
    SeriesDataset {
        label: label.to_string(),
        data: data.to_vec(),
        border_color: Some(color.to_string()),
        background_color: ColorSpec::Single(with_alpha(color, "20")),
        tension: Some(0.4),
    }
}

fn disease_trend_config() -> ChartConfig {
    let datasets = disease_names()
        .into_iter()
        .zip(DISEASE_TREND.iter())
        .zip(PALETTE.iter())
        .map(|((name, data), color)| line(name, data, color))
        .collect();

    let mut options = ChartOptions::responsive(true);
    options.plugins = Some(PluginOptions {
        legend: LegendOptions {
            position: "top".to_string(),
        },
        tooltip: TooltipOptions {
            mode: "index".to_string(),
            intersect: false,
        },
    });

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(&MONTH_LABELS),
            datasets,
        },
        options,
    }
}

fn water_quality_config() -> ChartConfig {
    let solid = PALETTE.iter().map(|c| c.to_string()).collect();
    let faded = PALETTE.iter().map(|c| with_alpha(c, "80")).collect();

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(&water_parameter_labels()),
            datasets: vec![
                SeriesDataset {
                    label: "Current Levels".to_string(),
                    data: water_current_levels(),
                    border_color: None,
                    background_color: ColorSpec::PerPoint(solid),
                    tension: None,
                },
                SeriesDataset {
                    label: "Safe Limits".to_string(),
                    data: water_safe_limits(),
                    border_color: None,
                    background_color: ColorSpec::PerPoint(faded),
                    tension: None,
                },
            ],
        },
        options: ChartOptions::responsive(true),
    }
}

fn prediction_config() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(&WEEK_LABELS),
            datasets: vec![
                line("Predicted Cases", &PREDICTED_CASES, PALETTE[2]),
                line("Current Trend", &CURRENT_TREND, PALETTE[0]),
            ],
        },
        options: ChartOptions::responsive(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_ids_are_distinct() {
        let mut ids: Vec<_> = ChartSlot::all().iter().map(|s| s.canvas_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn each_slot_belongs_to_one_screen() {
        for slot in ChartSlot::all() {
            assert_eq!(ChartSlot::for_screen(slot.screen()), Some(slot));
        }
        assert_eq!(ChartSlot::for_screen(ScreenId::AlertsView), None);
    }

    #[test]
    fn disease_trend_has_one_line_per_disease() {
        let cfg = ChartSlot::DiseaseTrend.config();
        assert_eq!(cfg.kind, ChartKind::Line);
        assert_eq!(cfg.data.datasets.len(), 4);
        assert_eq!(cfg.data.datasets[1].label, "Cholera");
        assert!(cfg
            .data
            .datasets
            .iter()
            .all(|d| d.data.len() == cfg.data.labels.len()));
    }

    #[test]
    fn water_quality_bars_follow_dataset() {
        let cfg = ChartSlot::WaterQuality.config();
        assert_eq!(cfg.kind, ChartKind::Bar);
        assert_eq!(cfg.data.labels, vec!["pH", "Turbidity", "Chlorine", "E.coli"]);
        assert_eq!(cfg.data.datasets[0].data, vec![7.2, 1.8, 0.4, 12.0]);
        assert_eq!(cfg.data.datasets[1].data, vec![7.5, 1.0, 0.6, 0.0]);
    }

    #[test]
    fn serialized_shape_matches_chart_js() {
        let json = serde_json::to_value(ChartSlot::Prediction.config()).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#B4413C");
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"], "#B4413C20");
        assert!(json["options"].get("plugins").is_none());
    }

    #[test]
    fn per_point_colors_serialize_as_array() {
        let json = serde_json::to_value(ChartSlot::WaterQuality.config()).unwrap();
        assert_eq!(json["data"]["datasets"][1]["backgroundColor"][0], "#1FB8CD80");
        assert!(json["data"]["datasets"][0].get("tension").is_none());
    }
}
