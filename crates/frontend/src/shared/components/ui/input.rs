use crate::shared::i18n::Translated;
use leptos::prelude::*;

/// Text input with a translated label
#[component]
pub fn Input(
    /// Translation key of the label
    label_key: &'static str,
    id: &'static str,
    value: RwSignal<String>,
    /// "text" (default), "number", ...
    #[prop(optional)]
    input_type: &'static str,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_t = if input_type.is_empty() { "text" } else { input_type };

    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                <Translated key=label_key />
            </label>
            <input
                id=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                required=required
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
