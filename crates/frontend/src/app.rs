use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::LocaleContext;
use crate::shared::live_updates::{start_simulator, LiveStatsContext};
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let app = AppGlobalContext::new();
    provide_context(app);

    provide_context(LocaleContext::new());

    // Live counters are shared by every dashboard of the signed-in role.
    let live = LiveStatsContext::new();
    provide_context(live);
    start_simulator(app, live);

    view! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}
