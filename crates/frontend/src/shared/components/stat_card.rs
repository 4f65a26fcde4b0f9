use crate::shared::icons::icon;
use contracts::shared::dataset::format_thousands;
use leptos::prelude::*;

/// Dashboard counter card.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// DOM id of the value element, e.g. `"total-cases"`
    #[prop(optional)]
    value_id: &'static str,
    #[prop(into)]
    value: Signal<i64>,
    /// Optional subtitle below the value
    #[prop(optional)]
    subtitle: &'static str,
    /// "success", "warning", "error" or empty
    #[prop(optional)]
    status: &'static str,
) -> impl IntoView {
    let class = if status.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", status)
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" id=value_id>
                    {move || format_thousands(value.get())}
                </div>
                {(!subtitle.is_empty()).then(|| view! { <div class="stat-card__subtitle">{subtitle}</div> })}
            </div>
        </div>
    }
}
