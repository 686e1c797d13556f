//! Caller identity extraction.
//!
//! Authentication happens upstream; the verified user id arrives in the
//! [`USER_ID_HEADER`] header. This module only resolves it to a known user.

use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use spotbook_app::ports::{
    ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository, UserRepository,
};
use spotbook_domain::id::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller of a request.
///
/// Rejects with `401` when the header is missing, is not a positive integer,
/// or names a user that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl<S, I, R, RI, U> FromRequestParts<AppState<S, I, R, RI, U>> for CurrentUser
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S, I, R, RI, U>,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| UserId::from_str(value.trim()).ok())
            .ok_or(ApiError::Unauthorized)?;

        match state.user_service.find_user(id).await? {
            Some(user) => Ok(Self(user.id)),
            None => {
                tracing::debug!(user_id = %id, "unknown caller");
                Err(ApiError::Unauthorized)
            }
        }
    }
}
