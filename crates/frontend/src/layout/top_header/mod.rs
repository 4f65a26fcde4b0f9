//! TopHeader - main navigation bar.
//!
//! Contains:
//! - Brand (click returns to role selection)
//! - Navigation entries allowed for the signed-in role
//! - Language selector and theme toggle

use crate::layout::global_context::use_app_context;
use crate::shared::i18n::{LanguageSelect, Translated};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::enums::View;
use contracts::system::session::is_view_allowed;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let nav_items = View::all()
        .into_iter()
        .map(|nav_view| {
            // Entries the role may not open stay in the DOM but are hidden
            let is_visible = move || {
                ctx.role()
                    .map(|role| is_view_allowed(role, nav_view))
                    .unwrap_or(false)
            };
            let is_active = move || ctx.active_view() == Some(nav_view);

            view! {
                <li
                    class=move || if is_active() { "nav-item active" } else { "nav-item" }
                    data-view=nav_view.code()
                    style:display=move || if is_visible() { "" } else { "none" }
                    on:click=move |_| ctx.navigate(nav_view)
                >
                    {icon(nav_view.icon())}
                    <Translated key=nav_view.translation_key() />
                </li>
            }
        })
        .collect_view();

    view! {
        <nav id="main-nav" class="main-nav">
            <div class="nav-brand" title="Back to role selection" on:click=move |_| ctx.logout()>
                {icon("heart")}
                <span class="nav-brand__title">"Smart Health Monitor"</span>
            </div>

            <ul class="nav-items">{nav_items}</ul>

            <div class="nav-actions">
                <span class="nav-role">
                    {move || ctx.role().map(|r| r.display_name()).unwrap_or_default()}
                </span>
                <LanguageSelect />
                <ThemeToggle />
            </div>
        </nav>
    }
}
