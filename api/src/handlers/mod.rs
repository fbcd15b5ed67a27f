pub mod error;
pub mod extractors;
pub mod system;

pub use error::*;
pub use extractors::*;
pub use system::*;
