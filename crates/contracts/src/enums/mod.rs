pub mod role;
pub mod view;

pub use role::Role;
pub use view::View;
