pub mod gate;
pub mod policy;
pub mod screen;
pub mod state;

pub use gate::{ActionGate, PendingAction};
pub use policy::{is_view_allowed, visible_views};
pub use screen::ScreenId;
pub use state::{IgnoreReason, LoginTicket, Phase, Session, Transition};
