//! Simulated real-time statistics.
//!
//! One interval drives all counters; it does nothing until a role is signed in.

use crate::layout::global_context::AppGlobalContext;
use contracts::config::{SIMULATOR_PERIOD_MS, SYNC_ANIMATION_MS};
use contracts::dashboards::d400_live_stats::{
    next_connectivity, Connectivity, LiveStats, SyncIndicator, SyncStatus,
};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct LiveStatsContext {
    pub stats: RwSignal<LiveStats>,
    pub connectivity: RwSignal<Connectivity>,
    pub sync: RwSignal<SyncIndicator>,
}

impl LiveStatsContext {
    pub fn new() -> Self {
        Self {
            stats: RwSignal::new(LiveStats::default()),
            connectivity: RwSignal::new(Connectivity::Connected),
            sync: RwSignal::new(SyncIndicator::default()),
        }
    }

    /// "Syncing..." for a moment, then back to "Synced".
    pub fn run_sync_animation(&self) {
        let sync = self.sync;
        let Some(run) = sync.try_update(|s| s.begin()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(SYNC_ANIMATION_MS).await;
            sync.update(|s| {
                s.finish(run);
            });
        });
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.sync.with(|s| s.status())
    }
}

impl Default for LiveStatsContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_live_stats() -> LiveStatsContext {
    use_context::<LiveStatsContext>().expect("LiveStatsContext not provided")
}

/// Starts the simulator interval for the lifetime of the page.
pub fn start_simulator(app: AppGlobalContext, live: LiveStatsContext) {
    Interval::new(SIMULATOR_PERIOD_MS, move || {
        let Some(role) = app.session.with_untracked(|s| s.role()) else {
            return;
        };
        let mut rng = rand::thread_rng();
        live.stats.update(|stats| stats.tick(&mut rng));
        if let Some(state) = next_connectivity(role, &mut rng) {
            live.connectivity.set(state);
        }
        log::debug!("live stats tick for {}", role);
    })
    .forget();
}
