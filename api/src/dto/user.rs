use serde::{Deserialize, Serialize};
use validator::Validate;

use dw_core::NewUser;

/// Body of `POST /api/users/register`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub profile_pic: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub preferred_locations: Vec<String>,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser {
            email: request.email,
            name: request.name,
            profile_pic: request.profile_pic,
            location: request.location,
            preferred_locations: request.preferred_locations,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLocationRequest {
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePreferredLocationsRequest {
    #[serde(default)]
    pub preferred_locations: Vec<String>,
}

/// Confirmation for a preferred-locations update, echoing the stored set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferredLocationsResponse {
    pub message: String,
    pub preferred_locations: Vec<String>,
}
