//! ScreenFrame - root container of every screen.
//!
//! All screens of the signed-in role stay mounted; exactly one of them
//! carries the `active` class, derived from the session on every change.

use crate::layout::global_context::use_app_context;
use contracts::system::session::ScreenId;
use leptos::prelude::*;

#[component]
pub fn ScreenFrame(
    screen: ScreenId,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let is_active = move || ctx.screen() == screen;

    view! {
        <section
            id=screen.dom_id()
            class=move || {
                let base = if is_active() { "screen active" } else { "screen" };
                if class.is_empty() { base.to_string() } else { format!("{base} {class}") }
            }
            aria-hidden=move || (!is_active()).to_string()
        >
            {children()}
        </section>
    }
}
