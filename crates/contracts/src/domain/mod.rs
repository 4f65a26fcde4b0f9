pub mod a001_region;
pub mod a002_disease;
pub mod a003_water_quality;
pub mod a004_alert;
