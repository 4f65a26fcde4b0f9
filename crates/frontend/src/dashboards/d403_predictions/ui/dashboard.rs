use crate::shared::charts::{ChartCanvas, ChartCanvasProps};
use crate::shared::components::PageHeader;
use crate::shared::page_frame::ScreenFrame;
use contracts::shared::charts::series::{CURRENT_TREND, PREDICTED_CASES, WEEK_LABELS};
use contracts::shared::charts::ChartSlot;
use contracts::system::session::ScreenId;
use leptos::prelude::*;

/// Week with the highest predicted case count.
fn forecast_peak() -> Option<(&'static str, f64)> {
    WEEK_LABELS
        .iter()
        .copied()
        .zip(PREDICTED_CASES.iter().copied())
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

/// Predicted excess over the current trend at the end of the horizon, in percent.
fn excess_over_trend() -> Option<f64> {
    let predicted = PREDICTED_CASES.last()?;
    let current = CURRENT_TREND.last()?;
    (*current > 0.0).then(|| (predicted - current) / current * 100.0)
}

/// Forecast for the coming weeks against the current trend.
#[component]
pub fn PredictionsView() -> impl IntoView {
    let peak = forecast_peak()
        .map(|(week, cases)| format!("{} cases expected in {}", cases, week))
        .unwrap_or_default();
    let excess = excess_over_trend()
        .map(|pct| format!("{:.1}% above the current trend", pct))
        .unwrap_or_default();

    view! {
        <ScreenFrame screen=ScreenId::PredictionsView>
            <PageHeader title_key="predictions" subtitle="Outbreak risk forecast".to_string()>
                {()}
            </PageHeader>

            <div class="card">
                {ChartCanvas(ChartCanvasProps { slot: ChartSlot::Prediction })}
            </div>

            <div class="card prediction-summary">
                <h3>"Forecast peak"</h3>
                <p>{peak}</p>
                <p class="text-muted">{excess}</p>
            </div>
        </ScreenFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_is_last_week() {
        assert_eq!(forecast_peak(), Some(("Week 6", 3250.0)));
    }

    #[test]
    fn excess_is_positive() {
        let pct = excess_over_trend().unwrap();
        assert!((pct - 22.18).abs() < 0.01, "{pct}");
    }
}
