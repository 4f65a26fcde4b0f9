//! Target-independent model of the health monitor client: reference data,
//! translations, role policy, session state and simulator arithmetic.

pub mod config;
pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
