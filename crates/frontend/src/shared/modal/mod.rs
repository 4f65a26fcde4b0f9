use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Popup for the simulated success notifications and record details.
#[component]
pub fn NotificationModal() -> impl IntoView {
    let ctx = use_app_context();

    // Escape closes the popup
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    ctx.dismiss_notification();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        {move || ctx.notification.get().map(|message| view! {
            <div class="modal-overlay" on:click=move |_| ctx.dismiss_notification()>
                <div class="modal" role="alertdialog" on:click=stop_propagation>
                    <div class="modal-header">
                        <button class="button button--icon modal__close" on:click=move |_| ctx.dismiss_notification()>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        {message.lines().map(|line| view! { <p>{line.to_string()}</p> }).collect_view()}
                    </div>
                    <div class="modal-footer">
                        <button class="button button--primary" on:click=move |_| ctx.dismiss_notification()>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="loading-modal" class=move || if ctx.is_busy() { "loading-modal" } else { "loading-modal hidden" }>
            <div class="loading-modal__content">
                <div class="spinner"></div>
                <p>"Loading..."</p>
            </div>
        </div>
    }
}
