//! Application Shell - root components of the app
//!
//! Contains:
//! - `AppShell` - login screen, the signed-in role's workspace, overlays
//! - `MainLayout` - Shell with the role's screens (exactly one active)

use crate::dashboards::{
    AshaWorkerDashboard, CommunityVolunteerDashboard, HealthOfficialDashboard, PredictionsView,
};
use crate::domain::a003_water_quality::ui::list::WaterQualityView;
use crate::domain::a004_alert::ui::list::AlertsView;
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::layout::Shell;
use crate::shared::modal::{LoadingOverlay, NotificationModal};
use crate::system::pages::login::LoginPage;
use crate::usecases::u501_learning_modules::EducationView;
use contracts::enums::{Role, View};
use contracts::system::session::is_view_allowed;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Screens of the signed-in role.
///
/// The role is read once: navigation only moves the `active` class, so the
/// screens (and the chart canvases inside them) stay mounted until logout.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();
    let role = ctx.session.with_untracked(|s| s.role());

    let dashboard = match role {
        Some(Role::AshaWorker) => view! { <AshaWorkerDashboard /> }.into_any(),
        Some(Role::CommunityVolunteer) => view! { <CommunityVolunteerDashboard /> }.into_any(),
        Some(Role::HealthOfficial) => view! { <HealthOfficialDashboard /> }.into_any(),
        None => ().into_any(),
    };
    let allowed = move |view: View| role.is_some_and(|r| is_view_allowed(r, view));

    // Chart widgets are built lazily when their screen becomes active.
    Effect::new(move |_| {
        let screen = ctx.screen();
        ctx.ensure_chart_for(screen);
    });

    view! {
        <Shell>
            {dashboard}
            {allowed(View::Alerts).then(|| view! { <AlertsView /> })}
            {allowed(View::WaterQuality).then(|| view! { <WaterQualityView /> })}
            {allowed(View::Education).then(|| view! { <EducationView /> })}
            {allowed(View::Predictions).then(|| view! { <PredictionsView /> })}
        </Shell>
    }
}

/// Window-level listeners: keyboard shortcuts and chart resizing.
fn install_window_listeners(ctx: AppGlobalContext) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            let modifier = keyboard_event.ctrl_key() || keyboard_event.meta_key();
            if ctx.handle_shortcut(&keyboard_event.key(), modifier) {
                keyboard_event.prevent_default();
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();

    let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
        ctx.resize_charts();
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

/// Application shell.
///
/// Renders:
/// - `LoginPage` always (active only while no role is signed in)
/// - `MainLayout` once a role is signed in
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_app_context();
    install_window_listeners(ctx);

    view! {
        <LoginPage />
        <Show when=move || ctx.role().is_some()>
            <MainLayout />
        </Show>
        <LoadingOverlay />
        <NotificationModal />
    }
}
