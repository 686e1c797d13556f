//! Review: a user's star rating and comment on a spot.

use serde::{Deserialize, Serialize};

use crate::error::{SpotbookError, ValidationErrors};
use crate::id::{ReviewId, ReviewImageId, SpotId, UserId};
use crate::time::Timestamp;
use crate::user::UserSummary;

/// A whole-star rating between [`Stars::MIN`] and [`Stars::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// `None` when `value` is outside `MIN..=MAX`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Accept a JSON number only if it is a whole number in range.
    #[must_use]
    pub fn from_number(value: f64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .find(|star| (f64::from(*star) - value).abs() < f64::EPSILON)
            .map(Self)
    }
}

/// Returned when a stored or submitted star value is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("stars must be between 1 and 5, got {0}")]
pub struct InvalidStars(pub u8);

impl TryFrom<u8> for Stars {
    type Error = InvalidStars;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidStars(value))
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub spot_id: SpotId,
    pub review: String,
    pub stars: Stars,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Incoming review payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewDraft {
    pub review: Option<String>,
    #[serde(default, deserialize_with = "crate::input::number")]
    pub stars: Option<f64>,
}

/// A validated review body that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewContent {
    pub review: String,
    pub stars: Stars,
}

impl ReviewDraft {
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`] when the text is blank or the
    /// stars are not a whole number from 1 to 5.
    pub fn validate(self) -> Result<ReviewContent, SpotbookError> {
        let review = self.review.filter(|text| !text.trim().is_empty());
        let stars = self.stars.and_then(Stars::from_number);

        let mut errors = ValidationErrors::new();
        errors.check(review.is_some(), "review", "Review text is required");
        errors.check(stars.is_some(), "stars", "Stars must be an integer from 1 to 5");

        match (review, stars) {
            (Some(review), Some(stars)) => Ok(ReviewContent { review, stars }),
            _ => Err(errors.into()),
        }
    }
}

/// An image attached to a review. Serializes as `{ id, url }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewImage {
    pub id: ReviewImageId,
    #[serde(skip_serializing)]
    pub review_id: ReviewId,
    pub url: String,
}

/// A review with its author and images embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDetail {
    #[serde(flatten)]
    pub review: Review,
    #[serde(rename = "User")]
    pub user: Option<UserSummary>,
    #[serde(rename = "ReviewImages")]
    pub review_images: Vec<ReviewImage>,
}
