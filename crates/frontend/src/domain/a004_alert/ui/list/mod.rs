use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{AlertStatusBadge, Button, SeverityBadge};
use crate::shared::components::PageHeader;
use crate::shared::page_frame::ScreenFrame;
use contracts::shared::dataset::{find_alert, ALERTS};
use contracts::system::session::{PendingAction, ScreenId};
use leptos::prelude::*;

#[component]
pub fn AlertsView() -> impl IntoView {
    let ctx = use_app_context();

    let view_details = move |id: u32| {
        if let Some(alert) = find_alert(id) {
            ctx.notify(alert.details_text());
        }
    };

    view! {
        <ScreenFrame screen=ScreenId::AlertsView>
            <PageHeader title_key="alerts">
                {()}
            </PageHeader>

            <div class="alert-list">
                {ALERTS.iter().map(|alert| {
                    let id = alert.id;
                    view! {
                        <div class=format!("alert-item alert-item--{}", alert.severity.as_str()) data-alert-id=id.to_string()>
                            <div class="alert-item__header">
                                <h4>{alert.kind}</h4>
                                <SeverityBadge severity=alert.severity />
                            </div>
                            <div class="alert-item__meta">
                                <span>{alert.location}</span>
                                <span>{alert.relative_time_label}</span>
                                <AlertStatusBadge status=alert.status />
                            </div>
                            <div class="alert-actions">
                                <Button
                                    disabled=Signal::derive(move || ctx.is_busy())
                                    on_click=Callback::new(move |_| {
                                        ctx.run_action(PendingAction::DeployResponseTeam(id), || {})
                                    })
                                >
                                    "Deploy Response Team"
                                </Button>
                                <Button variant="secondary" on_click=Callback::new(move |_| view_details(id))>
                                    "View Details"
                                </Button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </ScreenFrame>
    }
}
