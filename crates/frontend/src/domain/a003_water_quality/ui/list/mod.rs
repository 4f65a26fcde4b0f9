use crate::shared::charts::{ChartCanvas, ChartCanvasProps};
use crate::shared::components::PageHeader;
use crate::shared::page_frame::ScreenFrame;
use contracts::shared::charts::ChartSlot;
use contracts::shared::dataset::WATER_QUALITY_PARAMETERS;
use contracts::system::session::ScreenId;
use leptos::prelude::*;

#[component]
pub fn WaterQualityView() -> impl IntoView {
    view! {
        <ScreenFrame screen=ScreenId::WaterQualityView>
            <PageHeader title_key="water_quality" subtitle="Average readings across monitored sources".to_string()>
                {()}
            </PageHeader>

            <div class="card">
                {ChartCanvas(ChartCanvasProps { slot: ChartSlot::WaterQuality })}
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Parameter"</th>
                        <th>"Safe range"</th>
                        <th class="text-right">"Current average"</th>
                    </tr>
                </thead>
                <tbody>
                    {WATER_QUALITY_PARAMETERS.iter().map(|p| view! {
                        <tr>
                            <td>{p.parameter_name}</td>
                            <td>{p.safe_range_description}</td>
                            <td class="text-right">{format!("{}", p.current_average)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </ScreenFrame>
    }
}
