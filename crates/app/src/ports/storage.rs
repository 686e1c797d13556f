//! Storage port: repository traits for persistence.
//!
//! Ids are assigned by the store, so `create` methods take the unsaved parts
//! and return the stored record.

use std::future::Future;

use spotbook_domain::error::SpotbookError;
use spotbook_domain::id::{ReviewId, SpotId, UserId};
use spotbook_domain::review::{Review, ReviewContent, ReviewImage};
use spotbook_domain::spot::{Spot, SpotDetails};
use spotbook_domain::spot_image::{NewSpotImage, SpotImage};
use spotbook_domain::time::Timestamp;
use spotbook_domain::user::{NewUser, User};

/// Repository for persisting and querying [`Spot`]s.
pub trait SpotRepository {
    /// Store a new spot owned by `owner_id`.
    fn create(
        &self,
        owner_id: UserId,
        details: SpotDetails,
        created_at: Timestamp,
    ) -> impl Future<Output = Result<Spot, SpotbookError>> + Send;

    /// Get a spot by its identifier.
    fn get_by_id(
        &self,
        id: SpotId,
    ) -> impl Future<Output = Result<Option<Spot>, SpotbookError>> + Send;

    /// Get all spots, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Spot>, SpotbookError>> + Send;

    /// Get the spots owned by `owner_id`, ordered by id.
    fn find_by_owner(
        &self,
        owner_id: UserId,
    ) -> impl Future<Output = Result<Vec<Spot>, SpotbookError>> + Send;

    /// Overwrite the editable fields and `updated_at` of an existing spot.
    fn update(&self, spot: Spot) -> impl Future<Output = Result<Spot, SpotbookError>> + Send;

    /// Delete a spot. Dependent images and reviews go with it.
    fn delete(&self, id: SpotId) -> impl Future<Output = Result<(), SpotbookError>> + Send;
}

/// Repository for images attached to spots.
pub trait SpotImageRepository {
    /// Attach a new image to `spot_id`.
    fn create(
        &self,
        spot_id: SpotId,
        image: NewSpotImage,
    ) -> impl Future<Output = Result<SpotImage, SpotbookError>> + Send;

    /// Images of a spot, ordered by id.
    fn find_by_spot(
        &self,
        spot_id: SpotId,
    ) -> impl Future<Output = Result<Vec<SpotImage>, SpotbookError>> + Send;
}

/// Repository for reviews.
pub trait ReviewRepository {
    /// Store a review written by `user_id` about `spot_id`.
    ///
    /// Fails with [`SpotbookError::Conflict`] if the pair already has one.
    fn create(
        &self,
        spot_id: SpotId,
        user_id: UserId,
        content: ReviewContent,
        created_at: Timestamp,
    ) -> impl Future<Output = Result<Review, SpotbookError>> + Send;

    /// Reviews of a spot, ordered by id.
    fn find_by_spot(
        &self,
        spot_id: SpotId,
    ) -> impl Future<Output = Result<Vec<Review>, SpotbookError>> + Send;

    /// The review `user_id` wrote about `spot_id`, if any.
    fn find_by_spot_and_user(
        &self,
        spot_id: SpotId,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<Review>, SpotbookError>> + Send;
}

/// Repository for images attached to reviews.
pub trait ReviewImageRepository {
    fn create(
        &self,
        review_id: ReviewId,
        url: String,
    ) -> impl Future<Output = Result<ReviewImage, SpotbookError>> + Send;

    /// Images of a review, ordered by id.
    fn find_by_review(
        &self,
        review_id: ReviewId,
    ) -> impl Future<Output = Result<Vec<ReviewImage>, SpotbookError>> + Send;
}

/// Repository for user profiles.
pub trait UserRepository {
    /// Store a new user. A taken username or email fails with
    /// `ConflictError::DuplicateUser`.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, SpotbookError>> + Send;

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, SpotbookError>> + Send;
}
