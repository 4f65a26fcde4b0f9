use crate::layout::global_context::use_app_context;
use contracts::shared::dataset::{
    find_state, format_thousands, state_details_text, NORTHEAST_STATES,
};
use leptos::prelude::*;

/// Key used in `data-state`: first word of the name, lowercase.
fn state_key(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
        .to_lowercase()
}

/// Clickable list of the northeastern states.
#[component]
pub fn RegionList() -> impl IntoView {
    let ctx = use_app_context();

    let show_details = move |key: String| {
        if let Some(region) = find_state(&key) {
            ctx.notify(state_details_text(region));
        }
    };

    view! {
        <div class="state-list">
            {NORTHEAST_STATES.iter().map(|region| {
                let key = state_key(region.name);
                let key_attr = key.clone();
                view! {
                    <div class="state-item" data-state=key_attr on:click=move |_| show_details(key.clone())>
                        <div class="state-item__name">{region.name}</div>
                        <div class="state-item__stats">
                            <span>{format!("{} cases", format_thousands(region.active_cases as i64))}</span>
                            <span>{format!("{} water issues", region.water_quality_issues)}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_keys_resolve_back_to_regions() {
        for region in NORTHEAST_STATES {
            let key = state_key(region.name);
            assert_eq!(find_state(&key).map(|r| r.name), Some(region.name));
        }
        assert_eq!(state_key("Arunachal Pradesh"), "arunachal");
    }
}
