pub mod aggregate;

pub use aggregate::{DiseaseRecord, Severity, Trend};
