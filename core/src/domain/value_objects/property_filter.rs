//! Store-agnostic description of a property query.
//!
//! The in-memory repositories evaluate a [`PropertyFilter`] directly through
//! [`PropertyFilter::matches`]; the document store adapter translates it into
//! its own query language. Every populated criterion must hold for a match.

use dw_shared::PageWindow;
use serde::{Deserialize, Serialize};

use super::record_id::RecordId;
use crate::domain::entities::property::Property;

/// Inclusive price bounds, either side optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Criteria for selecting properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Restrict to these identifiers
    pub ids: Option<Vec<RecordId>>,
    /// Exact location match
    pub location: Option<String>,
    /// Location must be one of these
    pub locations: Option<Vec<String>>,
    pub price: PriceRange,
    pub owner_email: Option<String>,
    /// Only properties with at least one pending rental request
    pub with_rental_requests: bool,
    /// Limit/skip window; `None` returns every match
    pub window: Option<PageWindow>,
}

impl PropertyFilter {
    /// Match every property
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_ids(mut self, ids: Vec<RecordId>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn at_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn in_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn priced(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn owned_by(mut self, email: impl Into<String>) -> Self {
        self.owner_email = Some(email.into());
        self
    }

    pub fn with_pending_requests(mut self) -> Self {
        self.with_rental_requests = true;
        self
    }

    pub fn paged(mut self, window: PageWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Evaluate every criterion except the window
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(&property.id) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &property.location != location {
                return false;
            }
        }
        if let Some(locations) = &self.locations {
            if !locations.iter().any(|l| l == &property.location) {
                return false;
            }
        }
        if let Some(owner) = &self.owner_email {
            if &property.owner_email != owner {
                return false;
            }
        }
        if self.with_rental_requests && property.rental_requests.is_empty() {
            return false;
        }
        self.price.contains(property.price)
    }
}

/// Raw search inputs as they arrive from a query string
///
/// Unparsable price bounds are ignored and unparsable window values fall back
/// to their defaults, so building a filter never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub limit: Option<String>,
    pub skip: Option<String>,
}

impl SearchCriteria {
    pub fn to_filter(&self) -> PropertyFilter {
        let mut filter = PropertyFilter::all()
            .priced(PriceRange::new(
                parse_bound(self.min_price.as_deref()),
                parse_bound(self.max_price.as_deref()),
            ))
            .paged(PageWindow::from_raw(
                self.limit.as_deref(),
                self.skip.as_deref(),
            ));

        if let Some(location) = self.location.as_deref().map(str::trim) {
            if !location.is_empty() {
                filter = filter.at_location(location);
            }
        }
        filter
    }
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
