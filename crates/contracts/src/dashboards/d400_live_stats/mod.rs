//! Arithmetic behind the simulated live statistics.
//!
//! Randomness is injected so callers decide the source: the browser uses a
//! thread rng, tests use a seeded `StdRng`.

use crate::config::{ACTIVE_WORKERS_FLOOR, DISCONNECT_PROBABILITY};
use crate::enums::Role;
use crate::shared::dataset::{
    active_alert_count, total_active_cases, total_water_issues, ACTIVE_WORKERS_BASELINE,
};
use rand::Rng;
use std::ops::RangeInclusive;

pub const CASES_DELTA: RangeInclusive<i64> = -5..=4;
pub const WATER_ISSUES_DELTA: RangeInclusive<i64> = -3..=2;
pub const WORKERS_DELTA: RangeInclusive<i64> = -100..=99;

/// Adds a random delta from `delta` to `current`, never going below `floor`.
pub fn jitter<R: Rng>(
    current: i64,
    delta: RangeInclusive<i64>,
    floor: i64,
    rng: &mut R,
) -> i64 {
    (current + rng.gen_range(delta)).max(floor)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Connected,
    Disconnected,
}

impl Connectivity {
    pub fn icon(&self) -> &'static str {
        match self {
            Connectivity::Connected => "wifi",
            Connectivity::Disconnected => "wifi-off",
        }
    }

    /// Colour override for the indicator; `None` keeps the theme colour.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Connectivity::Connected => None,
            Connectivity::Disconnected => Some("#ff4444"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Connectivity::Connected => "Online",
            Connectivity::Disconnected => "Offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Synced,
    Syncing,
}

impl SyncStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "Synced",
            SyncStatus::Syncing => "Syncing...",
        }
    }
}

/// Sync indicator that tolerates overlapping runs.
///
/// Each run gets a number from `begin`; only the latest run may end it, so an
/// older timer cannot cut a newer "Syncing..." short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncIndicator {
    run: u64,
    syncing: bool,
}

impl SyncIndicator {
    pub fn status(&self) -> SyncStatus {
        if self.syncing {
            SyncStatus::Syncing
        } else {
            SyncStatus::Synced
        }
    }

    pub fn begin(&mut self) -> u64 {
        self.run += 1;
        self.syncing = true;
        self.run
    }

    /// Ends run `run`; returns `false` if a later run has started since.
    pub fn finish(&mut self, run: u64) -> bool {
        if run != self.run {
            return false;
        }
        self.syncing = false;
        true
    }
}

/// Counters displayed on the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveStats {
    pub total_cases: i64,
    pub water_issues: i64,
    pub active_workers: i64,
    pub active_alerts: i64,
}

impl Default for LiveStats {
    fn default() -> Self {
        Self {
            total_cases: total_active_cases(),
            water_issues: total_water_issues(),
            active_workers: ACTIVE_WORKERS_BASELINE,
            active_alerts: active_alert_count() as i64,
        }
    }
}

impl LiveStats {
    /// Moves every counter by one simulator step.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.total_cases = jitter(self.total_cases, CASES_DELTA, 0, rng);
        self.water_issues = jitter(self.water_issues, WATER_ISSUES_DELTA, 0, rng);
        self.active_workers = jitter(self.active_workers, WORKERS_DELTA, ACTIVE_WORKERS_FLOOR, rng);
    }
}

/// New connectivity state for one tick; only ASHA workers see drops.
pub fn next_connectivity<R: Rng>(role: Role, rng: &mut R) -> Option<Connectivity> {
    if role != Role::AshaWorker {
        return None;
    }
    if rng.gen_bool(DISCONNECT_PROBABILITY) {
        Some(Connectivity::Disconnected)
    } else {
        Some(Connectivity::Connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn counters_never_drop_below_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stats = LiveStats {
            total_cases: 2,
            water_issues: 1,
            active_workers: ACTIVE_WORKERS_FLOOR + 10,
            active_alerts: 0,
        };
        for _ in 0..10_000 {
            stats.tick(&mut rng);
            assert!(stats.total_cases >= 0);
            assert!(stats.water_issues >= 0);
            assert!(stats.active_workers >= ACTIVE_WORKERS_FLOOR);
        }
    }

    #[test]
    fn jitter_stays_within_delta() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let v = jitter(1_000, CASES_DELTA, 0, &mut rng);
            assert!((995..=1_004).contains(&v));
        }
    }

    #[test]
    fn jitter_at_floor_is_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(jitter(0, -10..=-1, 0, &mut rng), 0);
        }
    }

    #[test]
    fn only_asha_workers_see_connectivity_changes() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(next_connectivity(Role::HealthOfficial, &mut rng), None);
        assert_eq!(next_connectivity(Role::CommunityVolunteer, &mut rng), None);
        assert!(next_connectivity(Role::AshaWorker, &mut rng).is_some());
    }

    #[test]
    fn disconnects_are_rare() {
        let mut rng = StdRng::seed_from_u64(42);
        let drops = (0..10_000)
            .filter(|_| {
                next_connectivity(Role::AshaWorker, &mut rng) == Some(Connectivity::Disconnected)
            })
            .count();
        assert!((700..1_300).contains(&drops), "drops = {}", drops);
    }

    #[test]
    fn defaults_come_from_dataset() {
        let stats = LiveStats::default();
        assert_eq!(stats.total_cases, 2_365);
        assert_eq!(stats.water_issues, 1_005);
        assert_eq!(stats.active_alerts, 2);
        assert!(stats.active_workers >= ACTIVE_WORKERS_FLOOR);
    }

    #[test]
    fn overlapping_sync_runs_end_with_the_latest() {
        let mut sync = SyncIndicator::default();
        assert_eq!(sync.status(), SyncStatus::Synced);

        let first = sync.begin();
        let second = sync.begin();

        assert!(!sync.finish(first));
        assert_eq!(sync.status(), SyncStatus::Syncing);

        assert!(sync.finish(second));
        assert_eq!(sync.status(), SyncStatus::Synced);
    }
}
