//! In-memory implementation of every storage port, for service tests.
//!
//! Clones share the same tables, so one store can back several services.

use std::future::Future;
use std::sync::{Arc, Mutex};

use spotbook_domain::error::{ConflictError, SpotbookError};
use spotbook_domain::id::{ReviewId, ReviewImageId, SpotId, SpotImageId, UserId};
use spotbook_domain::review::{Review, ReviewContent, ReviewImage};
use spotbook_domain::spot::{Spot, SpotDetails};
use spotbook_domain::spot_image::{NewSpotImage, SpotImage};
use spotbook_domain::time::Timestamp;
use spotbook_domain::user::{NewUser, User};

use crate::ports::{
    ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository, UserRepository,
};

#[derive(Default)]
struct Tables {
    next_id: i64,
    spots: Vec<Spot>,
    spot_images: Vec<SpotImage>,
    reviews: Vec<Review>,
    review_images: Vec<ReviewImage>,
    users: Vec<User>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    /// Register a user and return its id.
    pub(crate) fn user(&self, first_name: &str) -> UserId {
        let mut tables = self.tables.lock().unwrap();
        let id = UserId::new(tables.next_id());
        tables.users.push(User {
            id,
            username: first_name.to_lowercase(),
            email: format!("{}@spotbook.io", first_name.to_lowercase()),
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
        });
        id
    }
}

impl SpotRepository for InMemoryStore {
    fn create(
        &self,
        owner_id: UserId,
        details: SpotDetails,
        created_at: Timestamp,
    ) -> impl Future<Output = Result<Spot, SpotbookError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let spot = Spot {
            id: SpotId::new(tables.next_id()),
            owner_id,
            details,
            created_at,
            updated_at: created_at,
        };
        tables.spots.push(spot.clone());
        async { Ok(spot) }
    }

    fn get_by_id(
        &self,
        id: SpotId,
    ) -> impl Future<Output = Result<Option<Spot>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.spots.iter().find(|s| s.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Spot>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.spots.clone();
        async { Ok(result) }
    }

    fn find_by_owner(
        &self,
        owner_id: UserId,
    ) -> impl Future<Output = Result<Vec<Spot>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<Spot> = tables
            .spots
            .iter()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(&self, spot: Spot) -> impl Future<Output = Result<Spot, SpotbookError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        if let Some(stored) = tables.spots.iter_mut().find(|s| s.id == spot.id) {
            *stored = spot.clone();
        }
        async { Ok(spot) }
    }

    fn delete(&self, id: SpotId) -> impl Future<Output = Result<(), SpotbookError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        tables.spots.retain(|s| s.id != id);
        tables.spot_images.retain(|i| i.spot_id != id);
        let removed: Vec<ReviewId> = tables
            .reviews
            .iter()
            .filter(|r| r.spot_id == id)
            .map(|r| r.id)
            .collect();
        tables.reviews.retain(|r| r.spot_id != id);
        tables
            .review_images
            .retain(|i| !removed.contains(&i.review_id));
        async { Ok(()) }
    }
}

impl SpotImageRepository for InMemoryStore {
    fn create(
        &self,
        spot_id: SpotId,
        image: NewSpotImage,
    ) -> impl Future<Output = Result<SpotImage, SpotbookError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let image = SpotImage {
            id: SpotImageId::new(tables.next_id()),
            spot_id,
            url: image.url,
            preview: image.preview,
        };
        tables.spot_images.push(image.clone());
        async { Ok(image) }
    }

    fn find_by_spot(
        &self,
        spot_id: SpotId,
    ) -> impl Future<Output = Result<Vec<SpotImage>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<SpotImage> = tables
            .spot_images
            .iter()
            .filter(|i| i.spot_id == spot_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

impl ReviewRepository for InMemoryStore {
    fn create(
        &self,
        spot_id: SpotId,
        user_id: UserId,
        content: ReviewContent,
        created_at: Timestamp,
    ) -> impl Future<Output = Result<Review, SpotbookError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let duplicate = tables
            .reviews
            .iter()
            .any(|r| r.spot_id == spot_id && r.user_id == user_id);
        let result: Result<Review, SpotbookError> = if duplicate {
            Err(ConflictError::DuplicateReview.into())
        } else {
            let review = Review {
                id: ReviewId::new(tables.next_id()),
                user_id,
                spot_id,
                review: content.review,
                stars: content.stars,
                created_at,
                updated_at: created_at,
            };
            tables.reviews.push(review.clone());
            Ok(review)
        };
        async { result }
    }

    fn find_by_spot(
        &self,
        spot_id: SpotId,
    ) -> impl Future<Output = Result<Vec<Review>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<Review> = tables
            .reviews
            .iter()
            .filter(|r| r.spot_id == spot_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn find_by_spot_and_user(
        &self,
        spot_id: SpotId,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<Review>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables
            .reviews
            .iter()
            .find(|r| r.spot_id == spot_id && r.user_id == user_id)
            .cloned();
        async { Ok(result) }
    }
}

impl ReviewImageRepository for InMemoryStore {
    fn create(
        &self,
        review_id: ReviewId,
        url: String,
    ) -> impl Future<Output = Result<ReviewImage, SpotbookError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let image = ReviewImage {
            id: ReviewImageId::new(tables.next_id()),
            review_id,
            url,
        };
        tables.review_images.push(image.clone());
        async { Ok(image) }
    }

    fn find_by_review(
        &self,
        review_id: ReviewId,
    ) -> impl Future<Output = Result<Vec<ReviewImage>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<ReviewImage> = tables
            .review_images
            .iter()
            .filter(|i| i.review_id == review_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

impl UserRepository for InMemoryStore {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, SpotbookError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let taken = tables
            .users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email);
        let result: Result<User, SpotbookError> = if taken {
            Err(ConflictError::DuplicateUser.into())
        } else {
            let user = User {
                id: UserId::new(tables.next_id()),
                username: user.username,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
            };
            tables.users.push(user.clone());
            Ok(user)
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, SpotbookError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.users.iter().find(|u| u.id == id).cloned();
        async { Ok(result) }
    }
}
