use serde::{Deserialize, Serialize};

use dw_core::{ListingChanges, NewListing, Property};

/// Body of `POST /api/properties`
///
/// Owner fields are never taken from the body; they are copied from the
/// user named by `?email=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePropertyRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub pictures: Vec<String>,
}

impl From<CreatePropertyRequest> for NewListing {
    fn from(request: CreatePropertyRequest) -> Self {
        NewListing {
            title: request.title,
            description: request.description,
            price: request.price,
            location: request.location,
            thumbnail: request.thumbnail,
            pictures: request.pictures,
        }
    }
}

/// Body of `PUT /api/properties/{id}`
///
/// Absent fields are left unchanged. `owner_email` identifies the caller and
/// takes precedence over `?email=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub thumbnail: Option<String>,
    pub pictures: Option<Vec<String>>,
    pub owner_email: Option<String>,
}

impl UpdatePropertyRequest {
    pub fn into_changes(self) -> (Option<String>, ListingChanges) {
        (
            self.owner_email,
            ListingChanges {
                title: self.title,
                description: self.description,
                price: self.price,
                location: self.location,
                thumbnail: self.thumbnail,
                pictures: self.pictures,
            },
        )
    }
}

/// A created property plus any warnings from the owner back-reference write
#[derive(Debug, Clone, Serialize)]
pub struct PropertyCreatedResponse {
    #[serde(flatten)]
    pub property: Property,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let request: CreatePropertyRequest =
            serde_json::from_value(serde_json::json!({ "title": "Loft", "location": "Austin" }))
                .unwrap();
        let listing = NewListing::from(request);
        assert_eq!(listing.price, 0.0);
        assert!(listing.pictures.is_empty());
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn test_update_request_splits_owner_email() {
        let request: UpdatePropertyRequest = serde_json::from_value(serde_json::json!({
            "price": 950.0,
            "owner_email": "owner@example.com"
        }))
        .unwrap();

        let (owner, changes) = request.into_changes();
        assert_eq!(owner.as_deref(), Some("owner@example.com"));
        assert_eq!(changes.price, Some(950.0));
        assert!(changes.title.is_none());
    }
}
