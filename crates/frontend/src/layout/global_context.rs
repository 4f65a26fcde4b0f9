use crate::shared::charts::{ChartJsBackend, ChartRegistry};
use contracts::config::{ACTION_DELAY_MS, CHART_INIT_DELAY_MS, LOGIN_DELAY_MS};
use contracts::enums::{Role, View};
use contracts::shared::charts::ChartSlot;
use contracts::system::session::{ActionGate, PendingAction, ScreenId, Session, Transition};
use contracts::system::shortcuts::{shortcut_for, Shortcut};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Application-wide state: the session, the pending action gate, the
/// notification popup and the chart widgets.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<Session>,
    pub gate: RwSignal<ActionGate>,
    pub notification: RwSignal<Option<String>>,
    charts: StoredValue<ChartRegistry<ChartJsBackend>, LocalStorage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            gate: RwSignal::new(ActionGate::new()),
            notification: RwSignal::new(None),
            charts: StoredValue::new_local(ChartRegistry::new(ChartJsBackend)),
        }
    }

    /// The one screen that carries the "active" designation.
    pub fn screen(&self) -> ScreenId {
        self.session.with(|s| s.screen())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.role())
    }

    pub fn active_view(&self) -> Option<View> {
        self.session.with(|s| s.active_view())
    }

    /// Loading overlay is up while a login or an action is in flight.
    pub fn is_busy(&self) -> bool {
        self.session.with(|s| s.is_pending()) || self.gate.with(|g| g.is_pending())
    }

    pub fn select_role(&self, role: Role) {
        let ticket = match self.session.try_update(|s| s.select_role(role)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(reason)) => {
                log::warn!("role selection {} ignored: {:?}", role, reason);
                return;
            }
            None => return,
        };
        log::info!("role {} selected, signing in", role);

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(LOGIN_DELAY_MS).await;
            match this.session.try_update(|s| s.complete_login(ticket)) {
                Some(Transition::Applied) => log!("🔷 signed in as {}", role),
                Some(Transition::Ignored(reason)) => {
                    log::debug!("login completion for {} dropped: {:?}", role, reason)
                }
                None => {}
            }
        });
    }

    pub fn navigate(&self, view: View) {
        match self.session.try_update(|s| s.navigate(view)) {
            Some(Transition::Applied) => log!("🔶 navigate: {}", view),
            Some(Transition::Ignored(reason)) => {
                log::debug!("navigation to {} ignored: {:?}", view, reason)
            }
            None => {}
        }
    }

    pub fn logout(&self) {
        self.session.update(|s| s.logout());
        self.gate.update(|g| g.reset());
        self.notification.set(None);
        self.charts.update_value(|reg| reg.destroy_all());
        log::info!("User logged out - returned to login screen");
    }

    /// Builds the chart owned by `screen`, if any, once the screen is laid out.
    pub fn ensure_chart_for(&self, screen: ScreenId) {
        let Some(slot) = ChartSlot::for_screen(screen) else {
            return;
        };
        if self.charts.with_value(|reg| reg.is_registered(slot)) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(CHART_INIT_DELAY_MS).await;
            if this.session.with_untracked(|s| s.screen()) != screen {
                return;
            }
            this.charts.update_value(|reg| match reg.ensure_chart(slot) {
                Ok(true) => log::debug!("chart {} created", slot.canvas_id()),
                Ok(false) => {}
                Err(e) => log::warn!("chart {} not created: {}", slot.canvas_id(), e),
            });
        });
    }

    pub fn resize_charts(&self) {
        self.charts.update_value(|reg| reg.resize_all());
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.notification.set(Some(message.into()));
    }

    pub fn dismiss_notification(&self) {
        self.notification.set(None);
    }

    /// Runs a simulated action behind the loading overlay.
    ///
    /// Rejected while another action is pending. `on_done` runs after the
    /// completion notification is raised.
    pub fn run_action<F>(&self, action: PendingAction, on_done: F)
    where
        F: FnOnce() + 'static,
    {
        match self.gate.try_update(|g| g.begin(action.clone())) {
            Some(Ok(())) => {}
            Some(Err(reason)) => {
                log::warn!("{:?} ignored: {:?}", action, reason);
                return;
            }
            None => return,
        }

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(ACTION_DELAY_MS).await;
            if let Some(Some(done)) = this.gate.try_update(|g| g.finish()) {
                this.notify(done.completion_message());
                on_done();
            }
        });
    }

    /// Handles a Ctrl/Cmd shortcut; returns whether the key was consumed.
    pub fn handle_shortcut(&self, key: &str, modifier: bool) -> bool {
        let Some(shortcut) = shortcut_for(key, modifier) else {
            return false;
        };
        if shortcut.is_enabled_for(self.session.with_untracked(|s| s.role())) {
            match shortcut {
                Shortcut::Navigate(view) => self.navigate(view),
                Shortcut::Logout => self.logout(),
            }
        }
        true
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
