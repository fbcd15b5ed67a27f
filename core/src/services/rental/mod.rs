//! Rental service module: requesting a property and resolving requests

mod service;

#[cfg(test)]
mod tests;

pub use service::RentalService;
