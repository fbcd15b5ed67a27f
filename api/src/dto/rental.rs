use serde::{Deserialize, Serialize};

use dw_core::RentalState;

/// `?user_id=` on `POST /api/properties/{id}/rent`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RentQuery {
    pub user_id: Option<String>,
}

/// Query of `POST /api/users/rental-requests/{id}/handle`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandleRentalQuery {
    pub renter_id: Option<String>,
    pub action: Option<String>,
    /// Owner email; when present the caller must own the property
    pub email: Option<String>,
}

/// Confirmation of a rental transition with the resulting pair state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalResponse {
    pub message: String,
    pub state: RentalState,
}

impl RentalResponse {
    pub fn new(message: impl Into<String>, state: RentalState) -> Self {
        Self {
            message: message.into(),
            state,
        }
    }
}
