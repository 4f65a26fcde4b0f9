pub mod charts;
pub mod components;
pub mod i18n;
pub mod icons;
pub mod live_updates;
pub mod modal;
pub mod page_frame;
pub mod theme;
