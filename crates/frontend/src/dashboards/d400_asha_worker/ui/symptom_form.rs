use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::i18n::Translated;
use crate::shared::live_updates::use_live_stats;
use contracts::system::session::PendingAction;
use leptos::prelude::*;

/// Symptom report for one patient.
///
/// Submitting goes through the action gate; on completion the form closes,
/// its fields are cleared and the sync indicator runs.
#[component]
pub fn SymptomForm(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let live = use_live_stats();

    let patient_name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let symptoms = RwSignal::new(String::new());

    let reset = move || {
        patient_name.set(String::new());
        age.set(String::new());
        symptoms.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.run_action(PendingAction::SymptomReport, move || {
            open.set(false);
            reset();
            live.run_sync_animation();
        });
    };

    let busy = Signal::derive(move || ctx.is_busy());

    view! {
        <div id="symptom-form" class="card symptom-form" style:display=move || if open.get() { "block" } else { "none" }>
            <h3><Translated key="symptom_reporting" /></h3>
            <form class="form" on:submit=on_submit>
                <Input label_key="patient_name" id="patient-name" value=patient_name required=true disabled=busy />
                <Input label_key="age" id="patient-age" value=age input_type="number" required=true disabled=busy />
                <Textarea label_key="symptoms" id="patient-symptoms" value=symptoms required=true rows=3 disabled=busy />
                <div class="form__actions">
                    <Button button_type="submit" disabled=busy>
                        <Translated key="submit_report" />
                    </Button>
                    <Button variant="secondary" on_click=Callback::new(move |_| open.set(false))>
                        <Translated key="cancel" />
                    </Button>
                </div>
            </form>
        </div>
    }
}
