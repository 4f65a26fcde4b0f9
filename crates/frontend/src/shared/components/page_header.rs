use crate::shared::i18n::Translated;
use leptos::prelude::*;

/// Screen heading; the title follows the selected language when a
/// translation key is given.
#[component]
pub fn PageHeader(
    /// Translation key of the title
    #[prop(optional)]
    title_key: Option<&'static str>,
    /// Title used when there is no translation key
    #[prop(optional)]
    title: &'static str,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Header actions (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    let title_view = match title_key {
        Some(key) => view! { <Translated key=key /> }.into_any(),
        None => view! { <span>{title}</span> }.into_any(),
    };

    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title_view}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
