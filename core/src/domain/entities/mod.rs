//! Domain entities representing core business objects.

pub mod property;
pub mod rental;
pub mod user;


// Re-export commonly used types
pub use property::{ListingChanges, NewListing, Property, PropertyWithRequesters};
pub use rental::{RentalAction, RentalEvent, RentalState};
pub use user::{NewUser, PropertyList, User};
