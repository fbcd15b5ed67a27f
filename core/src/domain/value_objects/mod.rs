//! Value objects shared by services and repositories.

pub mod outcome;
pub mod property_filter;
pub mod record_id;
pub mod user_lookup;

pub use outcome::Outcome;
pub use property_filter::{PriceRange, PropertyFilter, SearchCriteria};
pub use record_id::RecordId;
pub use user_lookup::UserLookup;
