pub mod badge;
pub mod button;
pub mod input;
pub mod textarea;

pub use badge::{AlertStatusBadge, SeverityBadge};
pub use button::Button;
pub use input::Input;
pub use textarea::Textarea;
