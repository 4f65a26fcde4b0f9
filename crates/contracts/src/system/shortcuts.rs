//! Ctrl/Cmd keyboard shortcuts.

use crate::enums::{Role, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Navigate(View),
    Logout,
}

/// Maps a key pressed together with Ctrl or Cmd to a shortcut.
///
/// The browser default is suppressed for every key that maps, even when the
/// shortcut ends up doing nothing.
pub fn shortcut_for(key: &str, modifier: bool) -> Option<Shortcut> {
    if !modifier {
        return None;
    }
    match key {
        "1" => Some(Shortcut::Navigate(View::Dashboard)),
        "2" => Some(Shortcut::Navigate(View::Alerts)),
        "3" => Some(Shortcut::Navigate(View::WaterQuality)),
        "4" => Some(Shortcut::Navigate(View::Education)),
        "5" => Some(Shortcut::Navigate(View::Predictions)),
        "l" | "L" => Some(Shortcut::Logout),
        _ => None,
    }
}

impl Shortcut {
    /// Whether the shortcut acts for the current role; nothing acts while logged out.
    pub fn is_enabled_for(&self, role: Option<Role>) -> bool {
        match (self, role) {
            (_, None) => false,
            (Shortcut::Navigate(View::Predictions), Some(role)) => role == Role::HealthOfficial,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_modifier() {
        assert_eq!(shortcut_for("1", false), None);
        assert_eq!(shortcut_for("1", true), Some(Shortcut::Navigate(View::Dashboard)));
        assert_eq!(shortcut_for("l", true), Some(Shortcut::Logout));
        assert_eq!(shortcut_for("9", true), None);
    }

    #[test]
    fn inactive_while_logged_out() {
        for key in ["1", "2", "3", "4", "5", "l"] {
            let shortcut = shortcut_for(key, true).unwrap();
            assert!(!shortcut.is_enabled_for(None));
        }
    }

    #[test]
    fn predictions_only_for_health_official() {
        let s = shortcut_for("5", true).unwrap();
        assert!(s.is_enabled_for(Some(Role::HealthOfficial)));
        assert!(!s.is_enabled_for(Some(Role::AshaWorker)));
        assert!(!s.is_enabled_for(Some(Role::CommunityVolunteer)));
        assert!(shortcut_for("2", true)
            .unwrap()
            .is_enabled_for(Some(Role::CommunityVolunteer)));
    }
}
