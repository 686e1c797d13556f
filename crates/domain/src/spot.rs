//! Spot: a listed property, plus the read models derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{ForbiddenError, SpotbookError, ValidationErrors};
use crate::id::{SpotId, UserId};
use crate::rating;
use crate::review::Stars;
use crate::spot_image::{self, SpotImage};
use crate::time::Timestamp;
use crate::user::UserSummary;

/// Longest accepted spot name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Lowest accepted nightly price.
pub const MIN_PRICE: f64 = 1.0;

/// The owner-editable part of a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotDetails {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A stored spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: SpotId,
    pub owner_id: UserId,
    #[serde(flatten)]
    pub details: SpotDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Spot {
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }

    /// Capability check run before any owner-only mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ForbiddenError::NotOwner`] when `user` is not the owner.
    pub fn ensure_owned_by(&self, user: UserId) -> Result<(), SpotbookError> {
        if self.is_owned_by(user) {
            Ok(())
        } else {
            Err(ForbiddenError::NotOwner.into())
        }
    }

    /// Inverse of [`Spot::ensure_owned_by`], used when reviewing.
    ///
    /// # Errors
    ///
    /// Returns [`ForbiddenError::OwnSpotReview`] when `user` is the owner.
    pub fn ensure_not_owned_by(&self, user: UserId) -> Result<(), SpotbookError> {
        if self.is_owned_by(user) {
            Err(ForbiddenError::OwnSpotReview.into())
        } else {
            Ok(())
        }
    }

    /// Replace every editable field and bump `updated_at`.
    pub fn apply(&mut self, details: SpotDetails, at: Timestamp) {
        self.details = details;
        self.updated_at = at;
    }
}

/// Incoming create/update payload. Every field is optional so that missing
/// ones are reported alongside invalid ones. Numbers may arrive as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotDraft {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "crate::input::number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "crate::input::number")]
    pub lng: Option<f64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::input::number")]
    pub price: Option<f64>,
}

fn present(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn within(value: Option<f64>, min: f64, max: f64) -> bool {
    value.is_some_and(|v| (min..=max).contains(&v))
}

impl SpotDraft {
    /// Check every field, collecting one message per failure.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`] with all failed fields.
    pub fn validate(self) -> Result<SpotDetails, SpotbookError> {
        let mut errors = ValidationErrors::new();
        errors.check(present(self.address.as_ref()), "address", "Street address is required");
        errors.check(present(self.city.as_ref()), "city", "City is required");
        errors.check(present(self.state.as_ref()), "state", "State is required");
        errors.check(present(self.country.as_ref()), "country", "Country is required");
        errors.check(within(self.lat, -90.0, 90.0), "lat", "Latitude must be within -90 and 90");
        errors.check(
            within(self.lng, -180.0, 180.0),
            "lng",
            "Longitude must be within -180 and 180",
        );
        match self.name.as_deref() {
            Some(name) if name.chars().count() > MAX_NAME_LEN => {
                errors.add("name", "Name must be less than 50 characters");
            }
            Some(name) if !name.trim().is_empty() => {}
            _ => errors.add("name", "Name is required"),
        }
        errors.check(
            present(self.description.as_ref()),
            "description",
            "Description is required",
        );
        errors.check(
            self.price.is_some_and(|p| p >= MIN_PRICE && p.is_finite()),
            "price",
            "Price per day must be a positive number",
        );
        errors.into_result()?;

        Ok(SpotDetails {
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            lat: self.lat.unwrap_or_default(),
            lng: self.lng.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        })
    }
}

/// A spot as shown in listings: base fields plus `avgRating` and
/// `previewImage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotSummary {
    #[serde(flatten)]
    pub spot: Spot,
    pub avg_rating: Option<f64>,
    pub preview_image: Option<String>,
}

impl SpotSummary {
    /// Derive the listing view from a spot, its review stars and its images.
    #[must_use]
    pub fn new(spot: Spot, stars: &[Stars], images: &[SpotImage]) -> Self {
        Self {
            spot,
            avg_rating: rating::average(stars.iter().copied()),
            preview_image: spot_image::preview_url(images).map(str::to_string),
        }
    }
}

/// Full detail view of a single spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDetail {
    #[serde(flatten)]
    pub spot: Spot,
    pub num_reviews: usize,
    pub avg_star_rating: Option<f64>,
    #[serde(rename = "SpotImages")]
    pub spot_images: Vec<SpotImage>,
    #[serde(rename = "Owner")]
    pub owner: Option<UserSummary>,
}

impl SpotDetail {
    #[must_use]
    pub fn new(
        spot: Spot,
        stars: &[Stars],
        spot_images: Vec<SpotImage>,
        owner: Option<UserSummary>,
    ) -> Self {
        Self {
            spot,
            num_reviews: stars.len(),
            avg_star_rating: rating::average(stars.iter().copied()),
            spot_images,
            owner,
        }
    }
}
