use contracts::domain::a002_disease::Severity;
use contracts::domain::a004_alert::AlertStatus;
use leptos::prelude::*;

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    let variant = match severity {
        Severity::Low => "badge--neutral",
        Severity::Medium => "badge--warning",
        Severity::High | Severity::Critical => "badge--error",
    };

    view! {
        <span class=format!("badge {} badge--{}", variant, severity.as_str())>
            {severity.display_name()}
        </span>
    }
}

#[component]
pub fn AlertStatusBadge(status: AlertStatus) -> impl IntoView {
    let class = match status {
        AlertStatus::Active => "badge badge--status badge--error",
        AlertStatus::UnderInvestigation => "badge badge--status badge--warning",
        AlertStatus::Resolved => "badge badge--status badge--success",
    };

    view! { <span class=class>{status.display_name()}</span> }
}
