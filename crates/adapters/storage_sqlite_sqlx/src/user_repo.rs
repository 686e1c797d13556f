//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use spotbook_app::ports::UserRepository;
use spotbook_domain::error::{ConflictError, SpotbookError};
use spotbook_domain::id::UserId;
use spotbook_domain::user::{NewUser, User};

use crate::error::StorageError;

struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO users (username, email, first_name, last_name) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, SpotbookError> {
        let result = sqlx::query(INSERT)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .execute(&self.pool)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    SpotbookError::from(ConflictError::DuplicateUser)
                }
                other => StorageError::from(other).into(),
            })?;

        Ok(User {
            id: UserId::new(result.last_insert_rowid()),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        })
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, SpotbookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }
}
