//! Colour scheme handling.
//!
//! The chosen scheme is the only state persisted across reloads. It is
//! stored in localStorage and mirrored to `data-color-scheme` on `<html>`.

use crate::shared::icons::icon;
use contracts::config::THEME_STORAGE_KEY;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Scheme selected by the toggle; anything but dark switches to dark.
    pub fn toggled(current: Option<Theme>) -> Theme {
        match current {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Icon shown on the toggle: the scheme the user would switch to.
    pub fn toggle_icon(current: Option<Theme>) -> &'static str {
        match current {
            Some(Theme::Dark) => "sun",
            _ => "moon",
        }
    }
}

fn load_theme_from_storage() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| Theme::parse(&s))
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("failed to persist theme: {:?}", e);
        }
    }
}

fn apply_color_scheme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-color-scheme", theme.as_str());
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// `None` until the user picks a scheme; the browser default applies.
    pub theme: RwSignal<Option<Theme>>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = Theme::toggled(self.theme.get_untracked());
        apply_color_scheme(next);
        save_theme_to_storage(next);
        self.theme.set(Some(next));
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let saved = load_theme_from_storage();
    if let Some(theme) = saved {
        apply_color_scheme(theme);
    }

    provide_context(ThemeContext {
        theme: RwSignal::new(saved),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            id="theme-toggle"
            class="button button--ghost button--icon"
            title="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || icon(Theme::toggle_icon(ctx.theme.get()))}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        assert_eq!(Theme::toggled(None), Theme::Dark);
        assert_eq!(Theme::toggled(Some(Theme::Dark)), Theme::Light);
        assert_eq!(Theme::toggled(Some(Theme::Light)), Theme::Dark);
    }

    #[test]
    fn parse_round_trips_known_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("forest"), None);
    }

    #[test]
    fn icon_points_to_next_scheme() {
        assert_eq!(Theme::toggle_icon(Some(Theme::Dark)), "sun");
        assert_eq!(Theme::toggle_icon(None), "moon");
    }
}
