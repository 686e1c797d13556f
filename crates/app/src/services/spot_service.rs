//! Spot service: use-cases for listing and managing spots.

use spotbook_domain::error::SpotbookError;
use spotbook_domain::id::{SpotId, UserId};
use spotbook_domain::review::Stars;
use spotbook_domain::spot::{Spot, SpotDetail, SpotDraft, SpotSummary};
use spotbook_domain::spot_image::{SpotImage, SpotImageDraft};
use spotbook_domain::time;

use super::spot_not_found;
use crate::ports::{ReviewRepository, SpotImageRepository, SpotRepository, UserRepository};

/// Application service for spot CRUD and the derived listing views.
pub struct SpotService<S, I, R, U> {
    spots: S,
    images: I,
    reviews: R,
    users: U,
}

impl<S, I, R, U> SpotService<S, I, R, U>
where
    S: SpotRepository,
    I: SpotImageRepository,
    R: ReviewRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(spots: S, images: I, reviews: R, users: U) -> Self {
        Self {
            spots,
            images,
            reviews,
            users,
        }
    }

    /// List every spot with its average rating and preview image.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn list_spots(&self) -> Result<Vec<SpotSummary>, SpotbookError> {
        let spots = self.spots.get_all().await?;
        self.summarize(spots).await
    }

    /// List the spots owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn list_spots_owned_by(
        &self,
        owner: UserId,
    ) -> Result<Vec<SpotSummary>, SpotbookError> {
        let spots = self.spots.find_by_owner(owner).await?;
        self.summarize(spots).await
    }

    async fn summarize(&self, spots: Vec<Spot>) -> Result<Vec<SpotSummary>, SpotbookError> {
        let mut summaries = Vec::with_capacity(spots.len());
        for spot in spots {
            let stars = self.review_stars(spot.id).await?;
            let images = self.images.find_by_spot(spot.id).await?;
            summaries.push(SpotSummary::new(spot, &stars, &images));
        }
        Ok(summaries)
    }

    async fn review_stars(&self, spot_id: SpotId) -> Result<Vec<Stars>, SpotbookError> {
        let reviews = self.reviews.find_by_spot(spot_id).await?;
        Ok(reviews.into_iter().map(|review| review.stars).collect())
    }

    /// Look up a spot by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::NotFound`] when no spot with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_spot(&self, id: SpotId) -> Result<Spot, SpotbookError> {
        self.spots
            .get_by_id(id)
            .await?
            .ok_or_else(|| spot_not_found(id))
    }

    /// Load a spot with its review statistics, images and owner.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::NotFound`] when no spot with `id` exists,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn get_spot_detail(&self, id: SpotId) -> Result<SpotDetail, SpotbookError> {
        let spot = self.get_spot(id).await?;
        let stars = self.review_stars(id).await?;
        let images = self.images.find_by_spot(id).await?;
        let owner = self
            .users
            .get_by_id(spot.owner_id)
            .await?
            .map(|user| user.summary());
        Ok(SpotDetail::new(spot, &stars, images, owner))
    }

    /// Validate `draft` and store it as a spot owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`] if any field fails, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_spot(&self, owner: UserId, draft: SpotDraft) -> Result<Spot, SpotbookError> {
        let details = draft.validate()?;
        self.spots.create(owner, details, time::now()).await
    }

    /// Load spot `id` and check that `caller` owns it.
    ///
    /// Every owner-only operation goes through this guard before mutating.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::NotFound`] when the spot is missing and
    /// [`SpotbookError::Forbidden`] when `caller` is not its owner.
    pub async fn authorize_owner(&self, caller: UserId, id: SpotId) -> Result<Spot, SpotbookError> {
        let spot = self.get_spot(id).await?;
        spot.ensure_owned_by(caller)?;
        Ok(spot)
    }

    /// Attach an image to a spot owned by `caller`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`Forbidden` from [`Self::authorize_owner`],
    /// [`SpotbookError::Validation`] for a missing url, or a storage error.
    #[tracing::instrument(skip(self, draft))]
    pub async fn add_image(
        &self,
        caller: UserId,
        id: SpotId,
        draft: SpotImageDraft,
    ) -> Result<SpotImage, SpotbookError> {
        let spot = self.authorize_owner(caller, id).await?;
        let image = draft.validate()?;
        self.images.create(spot.id, image).await
    }

    /// Overwrite every editable field of a spot owned by `caller`.
    ///
    /// Fields are validated before the spot is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`], `NotFound`, `Forbidden`, or a
    /// storage error.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_spot(
        &self,
        caller: UserId,
        id: SpotId,
        draft: SpotDraft,
    ) -> Result<Spot, SpotbookError> {
        let details = draft.validate()?;
        let mut spot = self.authorize_owner(caller, id).await?;
        spot.apply(details, time::now());
        self.spots.update(spot).await
    }

    /// Delete a spot owned by `caller`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`Forbidden` from [`Self::authorize_owner`], or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_spot(&self, caller: UserId, id: SpotId) -> Result<(), SpotbookError> {
        self.authorize_owner(caller, id).await?;
        self.spots.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::in_memory::InMemoryStore;
    use spotbook_domain::error::ForbiddenError;
    use spotbook_domain::review::{ReviewContent, Stars};
    use spotbook_domain::spot_image::NewSpotImage;

    type Service = SpotService<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;

    fn make_service() -> (Service, InMemoryStore) {
        let store = InMemoryStore::default();
        let service = SpotService::new(store.clone(), store.clone(), store.clone(), store.clone());
        (service, store)
    }

    fn valid_draft() -> SpotDraft {
        SpotDraft {
            address: Some("123 Disney Lane".to_string()),
            city: Some("San Francisco".to_string()),
            state: Some("California".to_string()),
            country: Some("United States of America".to_string()),
            lat: Some(37.76),
            lng: Some(-122.47),
            name: Some("App Academy".to_string()),
            description: Some("Place where web developers are created".to_string()),
            price: Some(123.0),
        }
    }

    async fn review(store: &InMemoryStore, spot: SpotId, author: UserId, stars: u8) {
        ReviewRepository::create(
            store,
            spot,
            author,
            ReviewContent {
                review: "ok".to_string(),
                stars: Stars::new(stars).unwrap(),
            },
            time::now(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn should_create_spot_owned_by_caller() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");

        let spot = svc.create_spot(owner, valid_draft()).await.unwrap();

        assert_eq!(spot.owner_id, owner);
        assert_eq!(spot.created_at, spot.updated_at);
        let fetched = svc.get_spot(spot.id).await.unwrap();
        assert_eq!(fetched.details.name, "App Academy");
    }

    #[tokio::test]
    async fn should_reject_create_when_draft_invalid() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let draft = SpotDraft {
            lat: Some(91.0),
            ..valid_draft()
        };

        let result = svc.create_spot(owner, draft).await;

        assert!(matches!(result, Err(SpotbookError::Validation(ref e)) if e.get("lat").is_some()));
        assert!(svc.list_spots().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_spots_with_null_rating_when_no_reviews() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        svc.create_spot(owner, valid_draft()).await.unwrap();

        let spots = svc.list_spots().await.unwrap();

        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].avg_rating, None);
        assert_eq!(spots[0].preview_image, None);
    }

    #[tokio::test]
    async fn should_list_spots_with_average_rating_and_preview() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let alice = store.user("Alice");
        let bob = store.user("Bob");
        let spot = svc.create_spot(owner, valid_draft()).await.unwrap();
        review(&store, spot.id, alice, 5).await;
        review(&store, spot.id, bob, 2).await;
        SpotImageRepository::create(
            &store,
            spot.id,
            NewSpotImage {
                url: "front.jpg".to_string(),
                preview: true,
            },
        )
        .await
        .unwrap();

        let spots = svc.list_spots().await.unwrap();

        assert_eq!(spots[0].avg_rating, Some(3.5));
        assert_eq!(spots[0].preview_image.as_deref(), Some("front.jpg"));
    }

    #[tokio::test]
    async fn should_list_only_spots_of_owner() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let other = store.user("Other");
        svc.create_spot(owner, valid_draft()).await.unwrap();
        svc.create_spot(other, valid_draft()).await.unwrap();

        let mine = svc.list_spots_owned_by(owner).await.unwrap();

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].spot.owner_id, owner);
    }

    #[tokio::test]
    async fn should_return_detail_with_owner_and_counts() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let guest = store.user("Guest");
        let spot = svc.create_spot(owner, valid_draft()).await.unwrap();
        review(&store, spot.id, guest, 4).await;

        let detail = svc.get_spot_detail(spot.id).await.unwrap();

        assert_eq!(detail.num_reviews, 1);
        assert_eq!(detail.avg_star_rating, Some(4.0));
        assert_eq!(detail.owner.unwrap().first_name, "Demo");
    }

    #[tokio::test]
    async fn should_return_not_found_when_spot_missing() {
        let (svc, _) = make_service();
        let result = svc.get_spot_detail(SpotId::new(999)).await;
        assert!(matches!(result, Err(SpotbookError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_add_image_when_caller_owns_spot() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let spot = svc.create_spot(owner, valid_draft()).await.unwrap();

        let image = svc
            .add_image(
                owner,
                spot.id,
                SpotImageDraft {
                    url: Some("pool.png".to_string()),
                    preview: Some(true),
                },
            )
            .await
            .unwrap();

        assert_eq!(image.spot_id, spot.id);
        assert!(image.preview);
    }

    #[tokio::test]
    async fn should_forbid_non_owner_mutations() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let intruder = store.user("Mallory");
        let spot = svc.create_spot(owner, valid_draft()).await.unwrap();

        let image = svc
            .add_image(intruder, spot.id, SpotImageDraft::default())
            .await;
        let update = svc.update_spot(intruder, spot.id, valid_draft()).await;
        let delete = svc.delete_spot(intruder, spot.id).await;

        for result in [image.map(|_| ()), update.map(|_| ()), delete] {
            assert!(matches!(
                result,
                Err(SpotbookError::Forbidden(ForbiddenError::NotOwner))
            ));
        }
        assert!(svc.get_spot(spot.id).await.is_ok());
    }

    #[tokio::test]
    async fn should_update_every_field_including_state() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let spot = svc.create_spot(owner, valid_draft()).await.unwrap();
        let draft = SpotDraft {
            state: Some("Nevada".to_string()),
            city: Some("Reno".to_string()),
            price: Some(80.0),
            ..valid_draft()
        };

        let updated = svc.update_spot(owner, spot.id, draft).await.unwrap();

        assert_eq!(updated.details.state, "Nevada");
        assert_eq!(updated.details.city, "Reno");
        assert!(updated.updated_at >= spot.updated_at);
        let stored = svc.get_spot(spot.id).await.unwrap();
        assert_eq!(stored.details.state, "Nevada");
    }

    #[tokio::test]
    async fn should_validate_update_before_lookup() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");

        let result = svc
            .update_spot(owner, SpotId::new(404), SpotDraft::default())
            .await;

        assert!(matches!(result, Err(SpotbookError::Validation(_))));
    }

    #[tokio::test]
    async fn should_delete_spot_when_owner() {
        let (svc, store) = make_service();
        let owner = store.user("Demo");
        let spot = svc.create_spot(owner, valid_draft()).await.unwrap();

        svc.delete_spot(owner, spot.id).await.unwrap();

        let result = svc.get_spot(spot.id).await;
        assert!(matches!(result, Err(SpotbookError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_before_forbidden() {
        let (svc, store) = make_service();
        let caller = store.user("Demo");
        let result = svc.delete_spot(caller, SpotId::new(12)).await;
        assert!(matches!(result, Err(SpotbookError::NotFound(_))));
    }
}
