//! Review service: use-cases for reading and writing spot reviews.

use spotbook_domain::error::{ConflictError, SpotbookError};
use spotbook_domain::id::{SpotId, UserId};
use spotbook_domain::review::{Review, ReviewDetail, ReviewDraft};
use spotbook_domain::time;

use super::spot_not_found;
use crate::ports::{ReviewImageRepository, ReviewRepository, SpotRepository, UserRepository};

/// Application service for reviews attached to spots.
pub struct ReviewService<S, R, RI, U> {
    spots: S,
    reviews: R,
    review_images: RI,
    users: U,
}

impl<S, R, RI, U> ReviewService<S, R, RI, U>
where
    S: SpotRepository,
    R: ReviewRepository,
    RI: ReviewImageRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(spots: S, reviews: R, review_images: RI, users: U) -> Self {
        Self {
            spots,
            reviews,
            review_images,
            users,
        }
    }

    /// List the reviews of a spot with author and images embedded.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::NotFound`] when the spot is missing, or a
    /// storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn list_for_spot(&self, spot_id: SpotId) -> Result<Vec<ReviewDetail>, SpotbookError> {
        if self.spots.get_by_id(spot_id).await?.is_none() {
            return Err(spot_not_found(spot_id));
        }

        let reviews = self.reviews.find_by_spot(spot_id).await?;
        let mut details = Vec::with_capacity(reviews.len());
        for review in reviews {
            let user = self
                .users
                .get_by_id(review.user_id)
                .await?
                .map(|user| user.summary());
            let review_images = self.review_images.find_by_review(review.id).await?;
            details.push(ReviewDetail {
                review,
                user,
                review_images,
            });
        }
        Ok(details)
    }

    /// Post a review by `author` on `spot_id`.
    ///
    /// The draft is validated first; then the spot must exist, must not be
    /// owned by `author`, and must not already carry a review from `author`.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`], [`SpotbookError::NotFound`],
    /// [`SpotbookError::Forbidden`], [`SpotbookError::Conflict`], or a
    /// storage error.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_review(
        &self,
        author: UserId,
        spot_id: SpotId,
        draft: ReviewDraft,
    ) -> Result<Review, SpotbookError> {
        let content = draft.validate()?;
        let spot = self
            .spots
            .get_by_id(spot_id)
            .await?
            .ok_or_else(|| spot_not_found(spot_id))?;
        spot.ensure_not_owned_by(author)?;

        if self
            .reviews
            .find_by_spot_and_user(spot_id, author)
            .await?
            .is_some()
        {
            return Err(ConflictError::DuplicateReview.into());
        }

        self.reviews
            .create(spot_id, author, content, time::now())
            .await
    }
}
