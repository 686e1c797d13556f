//! Error taxonomy shared across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SpotbookError`] via `#[from]`. Adapters decide how each variant is
//! rendered (HTTP status, log level, …).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum SpotbookError {
    /// One or more input fields failed validation.
    #[error("validation error")]
    Validation(#[from] ValidationErrors),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The caller is authenticated but not allowed to perform the operation.
    #[error(transparent)]
    Forbidden(#[from] ForbiddenError),

    /// The operation would violate a uniqueness rule.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures, keyed by field name.
///
/// Serializes as a flat `{ "field": "message" }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`. The first message recorded for a field wins.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }

    /// Record a failure for `field` unless `valid` holds.
    pub fn check(&mut self, valid: bool, field: &'static str, message: &'static str) {
        if !valid {
            self.add(field, message);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid fields:")?;
        for (idx, field) in self.fields.keys().enumerate() {
            let sep = if idx == 0 { " " } else { ", " };
            write!(f, "{sep}{field}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} couldn't be found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Spot"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// Authorization failures for authenticated callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ForbiddenError {
    /// The caller does not own the spot they are trying to change.
    #[error("Forbidden")]
    NotOwner,
    /// Owners may not review their own spot.
    #[error("You could not leave a review on your own property!")]
    OwnSpotReview,
}

/// Uniqueness violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("User already has a review for this spot")]
    DuplicateReview,
    /// Username or email is already taken.
    #[error("User already exists")]
    DuplicateUser,
}
