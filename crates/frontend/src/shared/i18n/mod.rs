//! Language selection and translated text nodes.

use contracts::config::DEFAULT_LANGUAGE;
use contracts::shared::i18n::{TaggedText, LANGUAGES};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub lang: RwSignal<String>,
}

impl LocaleContext {
    pub fn new() -> Self {
        Self {
            lang: RwSignal::new(DEFAULT_LANGUAGE.to_string()),
        }
    }

    /// Switches every translated node to `lang`.
    pub fn apply_localization(&self, lang: &str) {
        log::info!("language changed to {}", lang);
        self.lang.set(lang.to_string());
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not provided")
}

/// Text bound to a translation key.
///
/// Keeps its current text when the selected language has no entry for `key`.
#[component]
pub fn Translated(key: &'static str) -> impl IntoView {
    let locale = use_locale();
    let node = RwSignal::new(TaggedText::new(key));

    Effect::new(move |_| {
        let lang = locale.lang.get();
        node.update(|n| {
            n.localize(&lang);
        });
    });

    view! { <span data-translate=key>{move || node.with(|n| n.text.clone())}</span> }
}

#[component]
pub fn LanguageSelect() -> impl IntoView {
    let locale = use_locale();

    view! {
        <select
            id="language-select"
            class="form__select language-select"
            on:change=move |ev| locale.apply_localization(&event_target_value(&ev))
        >
            {LANGUAGES
                .iter()
                .map(|(code, name)| {
                    let code = *code;
                    view! {
                        <option value=code selected=move || locale.lang.get() == code>
                            {*name}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
