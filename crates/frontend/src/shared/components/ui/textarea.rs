use crate::shared::i18n::Translated;
use leptos::prelude::*;

/// Textarea with a translated label
#[component]
pub fn Textarea(
    /// Translation key of the label
    label_key: &'static str,
    id: &'static str,
    value: RwSignal<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                <Translated key=label_key />
            </label>
            <textarea
                id=id
                class="form__textarea"
                required=required
                rows=textarea_rows
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
