mod dashboard;

pub use dashboard::CommunityVolunteerDashboard;
