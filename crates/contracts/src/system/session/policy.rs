//! Which navigation entries each role may use.

use crate::enums::{Role, View};

pub fn is_view_allowed(role: Role, view: View) -> bool {
    match (role, view) {
        (_, View::Dashboard | View::WaterQuality | View::Education) => true,
        (Role::AshaWorker, View::Alerts) => true,
        (Role::AshaWorker, View::Predictions) => false,
        (Role::CommunityVolunteer, View::Alerts | View::Predictions) => false,
        (Role::HealthOfficial, View::Alerts | View::Predictions) => true,
    }
}

/// Nav entries shown for `role`, in nav bar order.
pub fn visible_views(role: Role) -> Vec<View> {
    View::all()
        .into_iter()
        .filter(|v| is_view_allowed(role, *v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_table() {
        use View::*;
        let expected = [
            (Role::AshaWorker, [true, true, true, true, false]),
            (Role::CommunityVolunteer, [true, false, true, true, false]),
            (Role::HealthOfficial, [true, true, true, true, true]),
        ];
        for (role, row) in expected {
            for (view, allowed) in [Dashboard, Alerts, WaterQuality, Education, Predictions]
                .into_iter()
                .zip(row)
            {
                assert_eq!(is_view_allowed(role, view), allowed, "{} / {}", role, view);
            }
        }
    }

    #[test]
    fn community_volunteer_nav_entries() {
        assert_eq!(
            visible_views(Role::CommunityVolunteer),
            vec![View::Dashboard, View::WaterQuality, View::Education]
        );
    }

    #[test]
    fn health_official_sees_everything() {
        assert_eq!(visible_views(Role::HealthOfficial), View::all().to_vec());
    }
}
