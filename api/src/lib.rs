//! HTTP layer for the Dwello backend
//!
//! Routes are generic over the repository implementations so the same
//! application can be served against MongoDB or the in-memory mocks.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
