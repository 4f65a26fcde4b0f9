use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::page_frame::ScreenFrame;
use contracts::enums::Role;
use contracts::system::session::ScreenId;
use leptos::prelude::*;

fn role_icon(role: Role) -> &'static str {
    match role {
        Role::AshaWorker => "clipboard",
        Role::CommunityVolunteer => "users",
        Role::HealthOfficial => "activity",
    }
}

/// Role selection screen shown while nobody is signed in.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ScreenFrame screen=ScreenId::Login class="login-screen">
            <div class="login-container">
                <div class="login-box">
                    <div class="login-brand">{icon("heart")}</div>
                    <h1>"Smart Health Monitor"</h1>
                    <h2>"Northeast India water-borne disease surveillance"</h2>

                    <div class="role-grid">
                        {Role::all().into_iter().map(|role| view! {
                            <button
                                class="role-btn"
                                data-role=role.code()
                                disabled=move || ctx.is_busy()
                                on:click=move |_| ctx.select_role(role)
                            >
                                <span class="role-btn__icon">{icon(role_icon(role))}</span>
                                <span class="role-btn__title">{role.display_name()}</span>
                                <span class="role-btn__description">{role.description()}</span>
                            </button>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </ScreenFrame>
    }
}
