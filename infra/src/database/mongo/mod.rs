//! MongoDB implementations of the repository traits

mod property_repository_impl;
mod user_repository_impl;

pub use property_repository_impl::{decode_with_requesters, MongoPropertyRepository};
pub use user_repository_impl::MongoUserRepository;
