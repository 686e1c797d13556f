//! JSON REST handlers for the reviews of a spot.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use spotbook_app::ports::{
    ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository, UserRepository,
};
use spotbook_domain::review::{Review, ReviewDetail, ReviewDraft};

use super::parse_spot_id;
use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::json::ApiJson;
use crate::state::AppState;

/// Body of `GET /spots/:spot_id/reviews`.
#[derive(Serialize)]
pub struct ReviewList {
    #[serde(rename = "Reviews")]
    pub reviews: Vec<ReviewDetail>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ReviewList>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Review>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /spots/:spot_id/reviews`
pub async fn list<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    Path(spot_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spot_id = parse_spot_id(&spot_id)?;
    let reviews = state.review_service.list_for_spot(spot_id).await?;
    Ok(ListResponse::Ok(Json(ReviewList { reviews })))
}

/// `POST /spots/:spot_id/reviews`
pub async fn create<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    CurrentUser(author): CurrentUser,
    Path(spot_id): Path<String>,
    ApiJson(draft): ApiJson<ReviewDraft>,
) -> Result<CreateResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spot_id = parse_spot_id(&spot_id)?;
    let review = state
        .review_service
        .create_review(author, spot_id, draft)
        .await?;
    Ok(CreateResponse::Created(Json(review)))
}
