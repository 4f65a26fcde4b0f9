pub mod aggregate;

pub use aggregate::{Alert, AlertStatus};
