pub mod cors;
pub mod request_id;

pub use cors::*;
pub use request_id::*;
