use crate::domain::a001_region::ui::list::RegionList;
use crate::domain::a002_disease::ui::list::DiseaseTable;
use crate::shared::charts::{ChartCanvas, ChartCanvasProps};
use crate::shared::components::StatCard;
use crate::shared::live_updates::use_live_stats;
use crate::shared::page_frame::ScreenFrame;
use contracts::dashboards::d400_live_stats::LiveStats;
use contracts::shared::charts::ChartSlot;
use contracts::system::session::ScreenId;
use leptos::prelude::*;

/// Region-wide overview: counters, per-state list, disease trend and table.
#[component]
pub fn HealthOfficialDashboard() -> impl IntoView {
    let live = use_live_stats();
    let stat = move |pick: fn(&LiveStats) -> i64| {
        Signal::derive(move || live.stats.with(pick))
    };

    view! {
        <ScreenFrame screen=ScreenId::HealthOfficialDashboard>
            <div class="page-header">
                <h1 class="page-header__title">"Health Official Dashboard"</h1>
            </div>

            <div class="stats-grid">
                <StatCard label="Total Active Cases" icon_name="activity" value_id="total-cases" value=stat(|s| s.total_cases) />
                <StatCard label="Water Quality Issues" icon_name="droplet" value_id="water-issues" value=stat(|s| s.water_issues) status="warning" />
                <StatCard label="Active Health Workers" icon_name="users" value_id="active-workers" value=stat(|s| s.active_workers) status="success" />
                <StatCard label="Active Alerts" icon_name="bell" value_id="active-alerts" value=stat(|s| s.active_alerts) status="error" />
            </div>

            <div class="dashboard-grid">
                <div class="card">
                    <h3>"States"</h3>
                    <RegionList />
                </div>
                <div class="card">
                    <h3>"Disease Trend"</h3>
                    {ChartCanvas(ChartCanvasProps { slot: ChartSlot::DiseaseTrend })}
                </div>
            </div>

            <div class="card">
                <h3>"Disease Overview"</h3>
                <DiseaseTable />
            </div>
        </ScreenFrame>
    }
}
