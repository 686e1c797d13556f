//! JSON body extractor with API-shaped rejections.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// Like [`axum::Json`], but a malformed body is answered with the same
/// error body as every other API failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
