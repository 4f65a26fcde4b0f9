use super::policy::is_view_allowed;
use crate::enums::{Role, View};

/// Every mutually exclusive screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Login,
    AshaWorkerDashboard,
    CommunityVolunteerDashboard,
    HealthOfficialDashboard,
    AlertsView,
    WaterQualityView,
    EducationView,
    PredictionsView,
}

impl ScreenId {
    /// Screen shown for `view` under `role`, or `None` if the role may not open it.
    pub fn resolve(role: Role, view: View) -> Option<ScreenId> {
        if !is_view_allowed(role, view) {
            return None;
        }
        Some(match view {
            View::Dashboard => ScreenId::dashboard_for(role),
            View::Alerts => ScreenId::AlertsView,
            View::WaterQuality => ScreenId::WaterQualityView,
            View::Education => ScreenId::EducationView,
            View::Predictions => ScreenId::PredictionsView,
        })
    }

    pub fn dashboard_for(role: Role) -> ScreenId {
        match role {
            Role::AshaWorker => ScreenId::AshaWorkerDashboard,
            Role::CommunityVolunteer => ScreenId::CommunityVolunteerDashboard,
            Role::HealthOfficial => ScreenId::HealthOfficialDashboard,
        }
    }

    pub fn dom_id(&self) -> &'static str {
        match self {
            ScreenId::Login => "login-screen",
            ScreenId::AshaWorkerDashboard => "asha-worker-dashboard",
            ScreenId::CommunityVolunteerDashboard => "community-volunteer-dashboard",
            ScreenId::HealthOfficialDashboard => "health-official-dashboard",
            ScreenId::AlertsView => "alerts-view",
            ScreenId::WaterQualityView => "water-quality-view",
            ScreenId::EducationView => "education-view",
            ScreenId::PredictionsView => "predictions-view",
        }
    }

    pub fn all() -> [ScreenId; 8] {
        [
            ScreenId::Login,
            ScreenId::AshaWorkerDashboard,
            ScreenId::CommunityVolunteerDashboard,
            ScreenId::HealthOfficialDashboard,
            ScreenId::AlertsView,
            ScreenId::WaterQualityView,
            ScreenId::EducationView,
            ScreenId::PredictionsView,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dom_ids_are_unique() {
        let ids: HashSet<_> = ScreenId::all().iter().map(|s| s.dom_id()).collect();
        assert_eq!(ids.len(), ScreenId::all().len());
    }

    #[test]
    fn dashboard_is_role_specific() {
        let screens: HashSet<_> = Role::all()
            .into_iter()
            .filter_map(|r| ScreenId::resolve(r, View::Dashboard))
            .collect();
        assert_eq!(screens.len(), 3);
        assert_eq!(
            ScreenId::resolve(Role::CommunityVolunteer, View::Dashboard).map(|s| s.dom_id()),
            Some("community-volunteer-dashboard")
        );
    }

    #[test]
    fn disallowed_views_do_not_resolve() {
        assert_eq!(ScreenId::resolve(Role::AshaWorker, View::Predictions), None);
        assert_eq!(ScreenId::resolve(Role::CommunityVolunteer, View::Alerts), None);
        assert_eq!(
            ScreenId::resolve(Role::HealthOfficial, View::Predictions),
            Some(ScreenId::PredictionsView)
        );
    }
}
