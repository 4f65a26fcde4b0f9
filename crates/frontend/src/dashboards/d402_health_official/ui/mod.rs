mod dashboard;

pub use dashboard::HealthOfficialDashboard;
