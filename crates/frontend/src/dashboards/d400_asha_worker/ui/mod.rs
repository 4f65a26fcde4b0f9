mod dashboard;
mod symptom_form;

pub use dashboard::AshaWorkerDashboard;
pub use symptom_form::SymptomForm;
