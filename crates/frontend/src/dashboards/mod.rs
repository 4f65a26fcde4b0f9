pub mod d400_asha_worker;
pub mod d401_community_volunteer;
pub mod d402_health_official;
pub mod d403_predictions;

pub use d400_asha_worker::ui::AshaWorkerDashboard;
pub use d401_community_volunteer::ui::CommunityVolunteerDashboard;
pub use d402_health_official::ui::HealthOfficialDashboard;
pub use d403_predictions::ui::PredictionsView;
