pub mod session;
pub mod shortcuts;
