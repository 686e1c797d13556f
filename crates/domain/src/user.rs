//! User: the account that owns spots and writes reviews.
//!
//! Credentials and sessions belong to the auth collaborator; this crate only
//! knows the profile fields the listing API exposes.

use serde::{Deserialize, Serialize};

use crate::error::{SpotbookError, ValidationErrors};
use crate::id::UserId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Public projection embedded as `Owner` / `User` in responses.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// `{ id, firstName, lastName }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// Profile of a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    /// Check that every profile field is present.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`] listing each empty field.
    pub fn validate(&self) -> Result<(), SpotbookError> {
        let mut errors = ValidationErrors::new();
        errors.check(!self.username.trim().is_empty(), "username", "Username is required");
        errors.check(self.email.contains('@'), "email", "Invalid email");
        errors.check(!self.first_name.trim().is_empty(), "firstName", "First Name is required");
        errors.check(!self.last_name.trim().is_empty(), "lastName", "Last Name is required");
        Ok(errors.into_result()?)
    }
}
