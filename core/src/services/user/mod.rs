//! User service module: registration, profile updates and reverse lookups

mod service;
mod types;


pub use service::UserService;
pub use types::Registration;
