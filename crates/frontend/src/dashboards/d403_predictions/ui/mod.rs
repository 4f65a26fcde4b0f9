mod dashboard;

pub use dashboard::PredictionsView;
