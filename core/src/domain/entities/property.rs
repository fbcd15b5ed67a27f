//! Property entity: a rentable unit advertised by its owner.

use chrono::{DateTime, Utc};
use dw_shared::validation::validators;
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::domain::value_objects::RecordId;
use crate::errors::ValidationError;

/// Listing fields supplied when a property is created
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub pictures: Vec<String>,
}

impl NewListing {
    pub fn new(title: impl Into<String>, price: f64, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price,
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_location(&self.location)?;
        validate_price(self.price)
    }
}

/// Listing fields an owner may change; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub thumbnail: Option<String>,
    pub pictures: Option<Vec<String>>,
}

impl ListingChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.thumbnail.is_none()
            && self.pictures.is_none()
    }

    /// Validate the supplied fields only
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(location) = &self.location {
            validate_location(location)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if validators::not_empty(title) {
        Ok(())
    } else {
        Err(ValidationError::RequiredField {
            field: "title".to_string(),
        })
    }
}

fn validate_location(location: &str) -> Result<(), ValidationError> {
    if validators::not_empty(location) {
        Ok(())
    } else {
        Err(ValidationError::RequiredField {
            field: "location".to_string(),
        })
    }
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if validators::is_valid_price(price) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
        })
    }
}

/// Property entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: RecordId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    pub location: String,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default)]
    pub pictures: Vec<String>,

    /// Owner snapshot taken at creation, never synced afterwards
    pub owner_email: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_pic: String,

    #[serde(default)]
    pub is_rented: bool,

    /// Set only when a rental request is accepted
    #[serde(default)]
    pub rented_by_email: Option<String>,
    #[serde(default)]
    pub rented_by_id: Option<RecordId>,

    /// Ids of users with a pending rental request
    #[serde(default)]
    pub rental_requests: Vec<RecordId>,

    /// Emails of users who liked the listing
    #[serde(default)]
    pub liked_by: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create a listing owned by `owner`
    pub fn new(listing: NewListing, owner: &User) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::generate(),
            title: listing.title.trim().to_string(),
            description: listing.description,
            price: listing.price,
            location: listing.location.trim().to_string(),
            thumbnail: listing.thumbnail,
            pictures: listing.pictures,
            owner_email: owner.email.clone(),
            owner_name: owner.name.clone(),
            owner_pic: owner.profile_pic.clone(),
            is_rented: false,
            rented_by_email: None,
            rented_by_id: None,
            rental_requests: Vec::new(),
            liked_by: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply owner edits; ownership, like and rental state are never touched
    pub fn apply_changes(&mut self, changes: &ListingChanges) {
        if let Some(title) = &changes.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(location) = &changes.location {
            self.location = location.trim().to_string();
        }
        if let Some(thumbnail) = &changes.thumbnail {
            self.thumbnail = thumbnail.clone();
        }
        if let Some(pictures) = &changes.pictures {
            self.pictures = pictures.clone();
        }
        self.touch();
    }

    pub fn add_like(&mut self, email: &str) -> bool {
        self.touch();
        if self.liked_by.iter().any(|e| e == email) {
            return false;
        }
        self.liked_by.push(email.to_string());
        true
    }

    pub fn remove_like(&mut self, email: &str) -> bool {
        self.touch();
        let before = self.liked_by.len();
        self.liked_by.retain(|e| e != email);
        self.liked_by.len() != before
    }

    pub fn has_rental_request(&self, user_id: &RecordId) -> bool {
        self.rental_requests.contains(user_id)
    }

    pub fn add_rental_request(&mut self, user_id: RecordId) -> bool {
        self.touch();
        if self.has_rental_request(&user_id) {
            return false;
        }
        self.rental_requests.push(user_id);
        true
    }

    pub fn remove_rental_request(&mut self, user_id: &RecordId) -> bool {
        self.touch();
        let before = self.rental_requests.len();
        self.rental_requests.retain(|id| id != user_id);
        self.rental_requests.len() != before
    }

    /// Record an accepted renter; the last accept wins
    pub fn mark_rented(&mut self, renter_id: RecordId, renter_email: Option<String>) {
        self.is_rented = true;
        self.rented_by_id = Some(renter_id);
        self.rented_by_email = renter_email;
        self.touch();
    }

    pub fn is_rented_by(&self, user_id: &RecordId) -> bool {
        self.is_rented && self.rented_by_id.as_ref() == Some(user_id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A property together with the profiles of the users asking to rent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyWithRequesters {
    #[serde(flatten)]
    pub property: Property,

    #[serde(default)]
    pub requesting_users: Vec<User>,
}
