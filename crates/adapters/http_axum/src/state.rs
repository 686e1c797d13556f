//! Shared application state for axum handlers.

use std::sync::Arc;

use spotbook_app::ports::{
    ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository, UserRepository,
};
use spotbook_app::services::review_service::ReviewService;
use spotbook_app::services::spot_service::SpotService;
use spotbook_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S, I, R, RI, U> {
    /// Spot listing, detail and owner-gated mutations.
    pub spot_service: Arc<SpotService<S, I, R, U>>,
    /// Reviews attached to spots.
    pub review_service: Arc<ReviewService<S, R, RI, U>>,
    /// Caller resolution.
    pub user_service: Arc<UserService<U>>,
}

impl<S, I, R, RI, U> Clone for AppState<S, I, R, RI, U> {
    fn clone(&self) -> Self {
        Self {
            spot_service: Arc::clone(&self.spot_service),
            review_service: Arc::clone(&self.review_service),
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<S, I, R, RI, U> AppState<S, I, R, RI, U>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        spot_service: SpotService<S, I, R, U>,
        review_service: ReviewService<S, R, RI, U>,
        user_service: UserService<U>,
    ) -> Self {
        Self {
            spot_service: Arc::new(spot_service),
            review_service: Arc::new(review_service),
            user_service: Arc::new(user_service),
        }
    }
}
