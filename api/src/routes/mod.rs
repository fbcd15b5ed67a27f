//! Route handlers grouped by resource

pub mod properties;
pub mod users;
