use crate::shared::components::ui::SeverityBadge;
use contracts::shared::dataset::{format_thousands, DISEASES};
use leptos::prelude::*;

#[component]
pub fn DiseaseTable() -> impl IntoView {
    view! {
        <table class="data-table disease-table">
            <thead>
                <tr>
                    <th>"Disease"</th>
                    <th class="text-right">"Cases"</th>
                    <th>"Trend"</th>
                    <th>"Severity"</th>
                </tr>
            </thead>
            <tbody>
                {DISEASES.iter().map(|d| view! {
                    <tr>
                        <td>{d.name}</td>
                        <td class="text-right">{format_thousands(d.case_count as i64)}</td>
                        <td class=format!("trend trend--{}", d.trend.as_str())>{d.trend.as_str()}</td>
                        <td><SeverityBadge severity=d.severity /></td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
