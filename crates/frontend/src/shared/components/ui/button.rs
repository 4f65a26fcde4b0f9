use leptos::prelude::*;

/// Action button; `secondary` is the outlined variant
#[component]
pub fn Button(
    /// "primary" (default) or "secondary"
    #[prop(optional)]
    variant: &'static str,
    /// "md" (default) or "sm"
    #[prop(optional)]
    size: &'static str,
    /// Button type attribute
    #[prop(optional)]
    button_type: &'static str,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = if variant == "secondary" {
        "button--secondary"
    } else {
        "button--primary"
    };
    let size_class = if size == "sm" { " button--small" } else { "" };
    let btn_type = if button_type.is_empty() { "button" } else { button_type };

    view! {
        <button
            type=btn_type
            class=format!("button {}{}", variant_class, size_class)
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
