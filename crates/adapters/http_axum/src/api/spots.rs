//! JSON REST handlers for spots and their images.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use spotbook_app::ports::{
    ReviewImageRepository, ReviewRepository, SpotImageRepository, SpotRepository, UserRepository,
};
use spotbook_domain::spot::{Spot, SpotDetail, SpotDraft, SpotSummary};
use spotbook_domain::spot_image::{SpotImage, SpotImageDraft};

use super::parse_spot_id;
use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::json::ApiJson;
use crate::state::AppState;

/// Body of `GET /spots`.
#[derive(Serialize)]
pub struct SpotList {
    #[serde(rename = "Spots")]
    pub spots: Vec<SpotSummary>,
}

/// Body of `GET /spots/current` when the caller owns spots.
#[derive(Serialize)]
pub struct OwnedSpotList {
    pub spots: Vec<SpotSummary>,
}

/// Plain `{ "message": … }` body.
#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<SpotList>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the current-user list endpoint.
pub enum ListCurrentResponse {
    Ok(Json<OwnedSpotList>),
    NoSpots,
}

impl IntoResponse for ListCurrentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NoSpots => Json(Message {
                message: "You do not have any spots posted yet!",
            })
            .into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<SpotDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Spot>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the add-image endpoint.
pub enum AddImageResponse {
    Ok(Json<SpotImage>),
}

impl IntoResponse for AddImageResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Spot>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(Message {
                message: "Successfully deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /spots`
pub async fn list<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
) -> Result<ListResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spots = state.spot_service.list_spots().await?;
    Ok(ListResponse::Ok(Json(SpotList { spots })))
}

/// `GET /spots/current`
pub async fn list_current<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    CurrentUser(caller): CurrentUser,
) -> Result<ListCurrentResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spots = state.spot_service.list_spots_owned_by(caller).await?;
    if spots.is_empty() {
        return Ok(ListCurrentResponse::NoSpots);
    }
    Ok(ListCurrentResponse::Ok(Json(OwnedSpotList { spots })))
}

/// `GET /spots/:spot_id`
pub async fn get<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    Path(spot_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spot_id = parse_spot_id(&spot_id)?;
    let detail = state.spot_service.get_spot_detail(spot_id).await?;
    Ok(GetResponse::Ok(Json(detail)))
}

/// `POST /spots`
pub async fn create<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    CurrentUser(caller): CurrentUser,
    ApiJson(draft): ApiJson<SpotDraft>,
) -> Result<CreateResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spot = state.spot_service.create_spot(caller, draft).await?;
    Ok(CreateResponse::Created(Json(spot)))
}

/// `POST /spots/:spot_id/images`
///
/// Ownership is checked before the body, so an unreadable body on someone
/// else's spot still answers 404/403.
pub async fn add_image<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    CurrentUser(caller): CurrentUser,
    Path(spot_id): Path<String>,
    body: Result<ApiJson<SpotImageDraft>, ApiError>,
) -> Result<AddImageResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spot_id = parse_spot_id(&spot_id)?;
    let draft = match body {
        Ok(ApiJson(draft)) => draft,
        Err(rejection) => {
            state.spot_service.authorize_owner(caller, spot_id).await?;
            return Err(rejection);
        }
    };
    let image = state.spot_service.add_image(caller, spot_id, draft).await?;
    Ok(AddImageResponse::Ok(Json(image)))
}

/// `PUT /spots/:spot_id`
pub async fn update<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    CurrentUser(caller): CurrentUser,
    Path(spot_id): Path<String>,
    ApiJson(draft): ApiJson<SpotDraft>,
) -> Result<UpdateResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spot_id = parse_spot_id(&spot_id)?;
    let spot = state
        .spot_service
        .update_spot(caller, spot_id, draft)
        .await?;
    Ok(UpdateResponse::Ok(Json(spot)))
}

/// `DELETE /spots/:spot_id`
pub async fn delete<S, I, R, RI, U>(
    State(state): State<AppState<S, I, R, RI, U>>,
    CurrentUser(caller): CurrentUser,
    Path(spot_id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: SpotRepository + Send + Sync + 'static,
    I: SpotImageRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    RI: ReviewImageRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let spot_id = parse_spot_id(&spot_id)?;
    state.spot_service.delete_spot(caller, spot_id).await?;
    Ok(DeleteResponse::Deleted)
}
