//! Type definitions module
//!
//! - `pagination` - The limit/skip window used by list endpoints
//! - `response` - API response envelopes and error codes

pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use pagination::PageWindow;
pub use response::{error_codes, ErrorResponse, HealthResponse, HealthStatus, MessageResponse};
