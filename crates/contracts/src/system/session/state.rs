//! Session state machine: which role is logged in and which view is open.

use super::policy::is_view_allowed;
use super::screen::ScreenId;
use crate::enums::{Role, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LoggedOut,
    /// Role chosen, login delay still running.
    Pending { role: Role },
    LoggedIn { role: Role, view: View },
}

/// Why a transition request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    LoginPending,
    AlreadyLoggedIn,
    NotLoggedIn,
    ViewNotAllowed,
    StaleLogin,
    ActionPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

/// Identifies one role selection; only the matching completion finishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    epoch: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::LoggedOut,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Role of a completed login.
    pub fn role(&self) -> Option<Role> {
        match self.phase {
            Phase::LoggedIn { role, .. } => Some(role),
            _ => None,
        }
    }

    pub fn active_view(&self) -> Option<View> {
        match self.phase {
            Phase::LoggedIn { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.phase, Phase::LoggedIn { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Starts the login delay for `role`.
    ///
    /// A second selection while one is pending (or while logged in) is rejected.
    pub fn select_role(&mut self, role: Role) -> Result<LoginTicket, IgnoreReason> {
        match self.phase {
            Phase::Pending { .. } => Err(IgnoreReason::LoginPending),
            Phase::LoggedIn { .. } => Err(IgnoreReason::AlreadyLoggedIn),
            Phase::LoggedOut => {
                self.epoch += 1;
                self.phase = Phase::Pending { role };
                Ok(LoginTicket(self.epoch))
            }
        }
    }

    /// Finishes the login started with `ticket` and opens the role dashboard.
    pub fn complete_login(&mut self, ticket: LoginTicket) -> Transition {
        match self.phase {
            Phase::Pending { role } if ticket.0 == self.epoch => {
                self.phase = Phase::LoggedIn {
                    role,
                    view: View::Dashboard,
                };
                Transition::Applied
            }
            _ => Transition::Ignored(IgnoreReason::StaleLogin),
        }
    }

    pub fn navigate(&mut self, view: View) -> Transition {
        match self.phase {
            Phase::LoggedIn { role, .. } if is_view_allowed(role, view) => {
                self.phase = Phase::LoggedIn { role, view };
                Transition::Applied
            }
            Phase::LoggedIn { .. } => Transition::Ignored(IgnoreReason::ViewNotAllowed),
            _ => Transition::Ignored(IgnoreReason::NotLoggedIn),
        }
    }

    /// Returns to the login screen from any state.
    ///
    /// A login still pending is abandoned; its completion will be ignored.
    pub fn logout(&mut self) {
        self.phase = Phase::LoggedOut;
    }

    /// The single screen that must be visible for this session.
    pub fn screen(&self) -> ScreenId {
        match self.phase {
            Phase::LoggedIn { role, view } => {
                ScreenId::resolve(role, view).unwrap_or_else(|| ScreenId::dashboard_for(role))
            }
            Phase::LoggedOut | Phase::Pending { .. } => ScreenId::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in(role: Role) -> Session {
        let mut s = Session::new();
        let ticket = s.select_role(role).unwrap();
        assert_eq!(s.complete_login(ticket), Transition::Applied);
        s
    }

    #[test]
    fn login_goes_through_pending() {
        let mut s = Session::new();
        assert_eq!(s.screen(), ScreenId::Login);

        let ticket = s.select_role(Role::AshaWorker).unwrap();
        assert!(s.is_pending());
        assert_eq!(s.screen(), ScreenId::Login);
        assert_eq!(s.role(), None);

        assert_eq!(s.complete_login(ticket), Transition::Applied);
        assert_eq!(s.role(), Some(Role::AshaWorker));
        assert_eq!(s.active_view(), Some(View::Dashboard));
        assert_eq!(s.screen(), ScreenId::AshaWorkerDashboard);
    }

    #[test]
    fn second_selection_while_pending_is_rejected() {
        let mut s = Session::new();
        let ticket = s.select_role(Role::AshaWorker).unwrap();
        assert_eq!(
            s.select_role(Role::HealthOfficial),
            Err(IgnoreReason::LoginPending)
        );

        s.complete_login(ticket);
        assert_eq!(s.role(), Some(Role::AshaWorker));
    }

    #[test]
    fn selection_while_logged_in_is_rejected() {
        let mut s = logged_in(Role::HealthOfficial);
        assert_eq!(
            s.select_role(Role::AshaWorker),
            Err(IgnoreReason::AlreadyLoggedIn)
        );
        assert_eq!(s.role(), Some(Role::HealthOfficial));
    }

    #[test]
    fn completion_after_logout_is_ignored() {
        let mut s = Session::new();
        let stale = s.select_role(Role::AshaWorker).unwrap();
        s.logout();
        let fresh = s.select_role(Role::AshaWorker).unwrap();

        assert_eq!(
            s.complete_login(stale),
            Transition::Ignored(IgnoreReason::StaleLogin)
        );
        assert!(s.is_pending());
        assert_eq!(s.complete_login(fresh), Transition::Applied);
    }

    #[test]
    fn navigate_follows_policy_for_every_role() {
        for role in Role::all() {
            for view in View::all() {
                let mut s = logged_in(role);
                s.navigate(View::WaterQuality);
                let before = s.screen();

                let result = s.navigate(view);
                match ScreenId::resolve(role, view) {
                    Some(expected) => {
                        assert_eq!(result, Transition::Applied);
                        assert_eq!(s.screen(), expected);
                        assert_eq!(s.active_view(), Some(view));
                    }
                    None => {
                        assert_eq!(result, Transition::Ignored(IgnoreReason::ViewNotAllowed));
                        assert_eq!(s.screen(), before);
                        assert_eq!(s.active_view(), Some(View::WaterQuality));
                    }
                }
            }
        }
    }

    #[test]
    fn navigate_when_logged_out_is_ignored() {
        let mut s = Session::new();
        assert_eq!(
            s.navigate(View::Alerts),
            Transition::Ignored(IgnoreReason::NotLoggedIn)
        );
        assert_eq!(s.screen(), ScreenId::Login);
    }

    #[test]
    fn logout_then_login_matches_fresh_login() {
        for role in Role::all() {
            let fresh = logged_in(role);

            let mut s = logged_in(role);
            s.navigate(View::Education);
            s.logout();
            assert_eq!(s.screen(), ScreenId::Login);
            assert_eq!(s.role(), None);

            let ticket = s.select_role(role).unwrap();
            s.complete_login(ticket);
            assert_eq!(s.screen(), fresh.screen());
            assert_eq!(s.phase(), fresh.phase());
        }
    }
}
