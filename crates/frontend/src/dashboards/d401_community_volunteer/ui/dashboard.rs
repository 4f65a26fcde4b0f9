use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::components::StatCard;
use crate::shared::i18n::Translated;
use crate::shared::icons::icon;
use crate::shared::live_updates::use_live_stats;
use crate::shared::page_frame::ScreenFrame;
use contracts::enums::View;
use contracts::system::session::{PendingAction, ScreenId};
use leptos::prelude::*;

const MEETING_MESSAGE: &str = "Health meeting scheduled for next week";

#[component]
pub fn CommunityVolunteerDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let live = use_live_stats();

    view! {
        <ScreenFrame screen=ScreenId::CommunityVolunteerDashboard>
            <div class="page-header">
                <h1 class="page-header__title">"Community Volunteer Dashboard"</h1>
            </div>

            <div class="stats-grid">
                <StatCard
                    label="Active Cases"
                    icon_name="activity"
                    value=Signal::derive(move || live.stats.with(|s| s.total_cases))
                />
                <StatCard
                    label="Water Issues"
                    icon_name="droplet"
                    value=Signal::derive(move || live.stats.with(|s| s.water_issues))
                    status="warning"
                />
            </div>

            <div class="quick-actions">
                <Button
                    disabled=Signal::derive(move || ctx.is_busy())
                    on_click=Callback::new(move |_| {
                        ctx.run_action(PendingAction::CommunityHealthReport, || {})
                    })
                >
                    {icon("clipboard")}
                    "Community Health Report"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.notify(MEETING_MESSAGE))>
                    {icon("calendar")}
                    "Schedule Health Meeting"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(View::Education))>
                    {icon("book")}
                    <Translated key="education" />
                </Button>
            </div>
        </ScreenFrame>
    }
}
