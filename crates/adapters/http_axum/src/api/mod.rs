//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod spots;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use spotbook_app::ports::{
    ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository, UserRepository,
};
use spotbook_domain::error::{NotFoundError, SpotbookError};
use spotbook_domain::id::SpotId;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/spots` sub-router.
pub fn routes<S, I, R, RI, U>() -> Router<AppState<S, I, R, RI, U>>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    Router::new()
        // Spots
        .route(
            "/",
            get(spots::list::<S, I, R, RI, U>).post(spots::create::<S, I, R, RI, U>),
        )
        .route("/current", get(spots::list_current::<S, I, R, RI, U>))
        .route(
            "/{spot_id}",
            get(spots::get::<S, I, R, RI, U>)
                .put(spots::update::<S, I, R, RI, U>)
                .delete(spots::delete::<S, I, R, RI, U>),
        )
        .route(
            "/{spot_id}/images",
            post(spots::add_image::<S, I, R, RI, U>),
        )
        // Reviews
        .route(
            "/{spot_id}/reviews",
            get(reviews::list::<S, I, R, RI, U>).post(reviews::create::<S, I, R, RI, U>),
        )
}

/// A path segment that is not a valid id cannot name an existing spot.
fn parse_spot_id(raw: &str) -> Result<SpotId, ApiError> {
    SpotId::from_str(raw).map_err(|_| {
        ApiError::from(SpotbookError::from(NotFoundError {
            entity: "Spot",
            id: raw.to_owned(),
        }))
    })
}
