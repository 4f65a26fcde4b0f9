pub mod aggregate;

pub use aggregate::WaterQualityParameter;
