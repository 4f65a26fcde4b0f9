//! Timing and simulation constants shared by the client.
//!
//! All delays are in milliseconds, matching `gloo_timers` units.

/// Simulated login/sync delay between role selection and the dashboard.
pub const LOGIN_DELAY_MS: u32 = 1_500;

/// Simulated latency of report submissions and other dashboard actions.
pub const ACTION_DELAY_MS: u32 = 1_000;

/// How long the "Syncing..." label stays before switching to "Synced".
pub const SYNC_ANIMATION_MS: u32 = 2_000;

/// Pause between a screen becoming active and its chart being built,
/// so the canvas has been laid out.
pub const CHART_INIT_DELAY_MS: u32 = 100;

/// Period of the live statistics simulator.
pub const SIMULATOR_PERIOD_MS: u32 = 30_000;

/// Lower bound for the active workers counter.
pub const ACTIVE_WORKERS_FLOOR: i64 = 37_000;

/// Probability that an ASHA worker's connectivity indicator drops per tick.
pub const DISCONNECT_PROBABILITY: f64 = 0.1;

/// localStorage key holding the chosen colour scheme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Language used for the initial page text.
pub const DEFAULT_LANGUAGE: &str = "en";
