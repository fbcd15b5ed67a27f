//! User entity representing a registered member of the marketplace.

use chrono::{DateTime, Utc};
use dw_shared::validation::{normalize_string_set, validators};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;
use crate::errors::ValidationError;

/// The back-reference lists a user document keeps about properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyList {
    /// Properties the user listed
    Posted,
    /// Properties the user liked
    Liked,
    /// Properties rented to the user
    Rented,
    /// Properties the user asked to rent
    RentalRequests,
}

impl PropertyList {
    /// Stored field name of the list
    pub fn field_name(&self) -> &'static str {
        match self {
            PropertyList::Posted => "posted_properties",
            PropertyList::Liked => "liked_properties",
            PropertyList::Rented => "rented_properties",
            PropertyList::RentalRequests => "rental_requests",
        }
    }
}

/// Registration input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_preferred_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_locations = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !validators::not_empty(&self.email) {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            });
        }
        if !validators::is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !validators::not_empty(&self.name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }
        Ok(())
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,

    /// Natural key, unique by check-then-insert
    pub email: String,

    pub name: String,

    #[serde(default)]
    pub profile_pic: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub preferred_locations: Vec<String>,

    #[serde(default)]
    pub posted_properties: Vec<RecordId>,

    #[serde(default)]
    pub liked_properties: Vec<RecordId>,

    #[serde(default)]
    pub rented_properties: Vec<RecordId>,

    /// Outgoing rental requests
    #[serde(default)]
    pub rental_requests: Vec<RecordId>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User from registration input with empty reference lists
    pub fn new(profile: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::generate(),
            email: profile.email.trim().to_string(),
            name: profile.name.trim().to_string(),
            profile_pic: profile.profile_pic,
            location: profile.location,
            preferred_locations: normalize_string_set(profile.preferred_locations),
            posted_properties: Vec::new(),
            liked_properties: Vec::new(),
            rented_properties: Vec::new(),
            rental_requests: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn references(&self, list: PropertyList) -> &[RecordId] {
        match list {
            PropertyList::Posted => &self.posted_properties,
            PropertyList::Liked => &self.liked_properties,
            PropertyList::Rented => &self.rented_properties,
            PropertyList::RentalRequests => &self.rental_requests,
        }
    }

    fn references_mut(&mut self, list: PropertyList) -> &mut Vec<RecordId> {
        match list {
            PropertyList::Posted => &mut self.posted_properties,
            PropertyList::Liked => &mut self.liked_properties,
            PropertyList::Rented => &mut self.rented_properties,
            PropertyList::RentalRequests => &mut self.rental_requests,
        }
    }

    /// Set-insert a property id; returns whether the list changed
    pub fn add_reference(&mut self, list: PropertyList, property_id: RecordId) -> bool {
        self.touch();
        let refs = self.references_mut(list);
        if refs.contains(&property_id) {
            return false;
        }
        refs.push(property_id);
        true
    }

    /// Remove a property id; returns whether the list changed
    pub fn remove_reference(&mut self, list: PropertyList, property_id: &RecordId) -> bool {
        self.touch();
        let refs = self.references_mut(list);
        let before = refs.len();
        refs.retain(|id| id != property_id);
        refs.len() != before
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.touch();
    }

    pub fn set_preferred_locations(&mut self, locations: Vec<String>) {
        self.preferred_locations = normalize_string_set(locations);
        self.touch();
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
