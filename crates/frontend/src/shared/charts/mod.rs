pub mod chart_js;
pub mod registry;

pub use chart_js::ChartJsBackend;
pub use registry::{ChartBackend, ChartRegistry};

use contracts::shared::charts::ChartSlot;
use leptos::prelude::*;

/// Canvas the widget for `slot` is drawn into.
#[component]
pub fn ChartCanvas(slot: ChartSlot) -> impl IntoView {
    view! {
        <div class="chart-container">
            <canvas id=slot.canvas_id()></canvas>
        </div>
    }
}
