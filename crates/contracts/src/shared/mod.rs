pub mod charts;
pub mod dataset;
pub mod i18n;
