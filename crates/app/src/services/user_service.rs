//! User service: resolves the caller and registers profiles.

use spotbook_domain::error::{ConflictError, NotFoundError, SpotbookError};
use spotbook_domain::id::UserId;
use spotbook_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user lookups.
pub struct UserService<U> {
    users: U,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new service backed by the given repository.
    pub fn new(users: U) -> Self {
        Self { users }
    }

    /// Validate and store a new user profile.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`] if a field is missing, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    pub async fn register_user(&self, user: NewUser) -> Result<User, SpotbookError> {
        user.validate()?;
        self.users.create(user).await
    }

    /// Register every user in `users`, skipping those whose username or
    /// email is already taken. Returns how many were created.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::Validation`] for an incomplete profile, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all, fields(count = users.len()))]
    pub async fn seed_users(&self, users: Vec<NewUser>) -> Result<usize, SpotbookError> {
        let mut created = 0;
        for user in users {
            match self.register_user(user).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, username = %user.username, "seeded user");
                    created += 1;
                }
                Err(SpotbookError::Conflict(ConflictError::DuplicateUser)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(created)
    }

    /// Look up a user by id, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_user(&self, id: UserId) -> Result<Option<User>, SpotbookError> {
        self.users.get_by_id(id).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SpotbookError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, SpotbookError> {
        self.find_user(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }
}
