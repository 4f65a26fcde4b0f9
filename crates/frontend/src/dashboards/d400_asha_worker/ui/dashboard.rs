use super::SymptomForm;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::components::StatCard;
use crate::shared::i18n::Translated;
use crate::shared::icons::icon;
use crate::shared::live_updates::use_live_stats;
use crate::shared::page_frame::ScreenFrame;
use contracts::dashboards::d400_live_stats::SyncStatus;
use contracts::enums::View;
use contracts::system::session::ScreenId;
use leptos::prelude::*;

const WATER_TEST_MESSAGE: &str =
    "Water Quality Testing Form - This would open a form for recording water test results";
const PATIENT_TRACKING_MESSAGE: &str =
    "Patient Tracking - This would show patient follow-up interface";

/// Connectivity indicator plus the sync status label.
///
/// While a sync runs the indicator shows a spinning sync icon instead of the
/// connectivity icon.
#[component]
fn ConnectionStatus() -> impl IntoView {
    let live = use_live_stats();
    let syncing = move || live.sync_status() == SyncStatus::Syncing;

    view! {
        <div class="connection-status">
            <span
                id="connection-indicator"
                class=move || if syncing() { "connection-status__icon spin" } else { "connection-status__icon" }
                style:color=move || if syncing() { "" } else { live.connectivity.get().color().unwrap_or("") }
                title=move || live.connectivity.get().label()
            >
                {move || {
                    if syncing() {
                        icon("sync")
                    } else {
                        icon(live.connectivity.get().icon())
                    }
                }}
            </span>
            <span id="sync-status" class="connection-status__sync">
                {move || live.sync_status().label()}
            </span>
        </div>
    }
}

#[component]
pub fn AshaWorkerDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let live = use_live_stats();
    let form_open = RwSignal::new(false);

    view! {
        <ScreenFrame screen=ScreenId::AshaWorkerDashboard>
            <div class="page-header">
                <h1 class="page-header__title">"ASHA Worker Dashboard"</h1>
                <ConnectionStatus />
            </div>

            <div class="stats-grid">
                <StatCard
                    label="Active Cases"
                    icon_name="activity"
                    value_id="total-cases"
                    value=Signal::derive(move || live.stats.with(|s| s.total_cases))
                    subtitle="Across monitored villages"
                />
                <StatCard
                    label="Water Issues"
                    icon_name="droplet"
                    value_id="water-issues"
                    value=Signal::derive(move || live.stats.with(|s| s.water_issues))
                    status="warning"
                />
            </div>

            <div class="quick-actions">
                <Button on_click=Callback::new(move |_| form_open.update(|open| *open = !*open))>
                    {icon("clipboard")}
                    <Translated key="symptom_reporting" />
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.notify(WATER_TEST_MESSAGE))>
                    {icon("droplet")}
                    "Water Quality Test"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.notify(PATIENT_TRACKING_MESSAGE))>
                    {icon("users")}
                    "Patient Tracking"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(View::Education))>
                    {icon("book")}
                    <Translated key="education" />
                </Button>
            </div>

            <SymptomForm open=form_open />
        </ScreenFrame>
    }
}
