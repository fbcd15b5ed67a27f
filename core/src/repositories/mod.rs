pub mod property;
pub mod user;

pub use property::{MockPropertyRepository, PropertyRepository};
pub use user::{MockUserRepository, UserRepository};
