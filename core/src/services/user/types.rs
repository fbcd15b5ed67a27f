//! Result types for user operations

use serde::Serialize;

use crate::domain::entities::user::User;

/// Result of an idempotent registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub user: User,
    /// `true` when a new document was inserted, `false` for an existing email
    pub created: bool,
}
