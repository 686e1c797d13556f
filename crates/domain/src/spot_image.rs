//! Spot image: a photo attached to a spot, optionally flagged as its preview.

use serde::{Deserialize, Serialize};

use crate::error::{SpotbookError, ValidationErrors};
use crate::id::{SpotId, SpotImageId};

/// An image belonging to a spot.
///
/// Serializes as `{ id, url, preview }`; the owning spot is implied by the
/// enclosing resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotImage {
    pub id: SpotImageId,
    #[serde(skip_serializing)]
    pub spot_id: SpotId,
    pub url: String,
    pub preview: bool,
}

/// Url of the first image flagged as preview, if any.
///
/// Several images may carry the flag; callers pass images in id order so the
/// oldest one wins.
#[must_use]
pub fn preview_url(images: &[SpotImage]) -> Option<&str> {
    images
        .iter()
        .find(|image| image.preview)
        .map(|image| image.url.as_str())
}

/// Incoming request to attach an image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotImageDraft {
    pub url: Option<String>,
    pub preview: Option<bool>,
}

/// A validated image that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpotImage {
    pub url: String,
    pub preview: bool,
}

impl SpotImageDraft {
    /// Validate the draft. `preview` defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`] when `url` is missing or blank.
    pub fn validate(self) -> Result<NewSpotImage, SpotbookError> {
        match self.url {
            Some(url) if !url.trim().is_empty() => Ok(NewSpotImage {
                url,
                preview: self.preview.unwrap_or(false),
            }),
            _ => {
                let mut errors = ValidationErrors::new();
                errors.add("url", "Image url is required");
                Err(errors.into())
            }
        }
    }
}
