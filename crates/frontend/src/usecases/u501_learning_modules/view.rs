use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::ScreenFrame;
use contracts::shared::dataset::EDUCATION_MODULES;
use contracts::system::session::{PendingAction, ScreenId};
use leptos::prelude::*;

/// Learning modules available to every role.
#[component]
pub fn EducationView() -> impl IntoView {
    let ctx = use_app_context();
    let busy = Signal::derive(move || ctx.is_busy());

    view! {
        <ScreenFrame screen=ScreenId::EducationView>
            <PageHeader title_key="education" subtitle="Health awareness material for field work".to_string()>
                {()}
            </PageHeader>

            <div class="module-grid">
                {EDUCATION_MODULES.iter().map(|module| {
                    let title = module.title;
                    view! {
                        <div class="card module-card">
                            <div class="module-card__icon">{icon("book")}</div>
                            <h4>{title}</h4>
                            <p>{module.summary}</p>
                            <Button
                                size="sm"
                                disabled=busy
                                on_click=Callback::new(move |_| {
                                    ctx.run_action(PendingAction::LearningModule(title.to_string()), || {})
                                })
                            >
                                "Start Module"
                            </Button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </ScreenFrame>
    }
}
