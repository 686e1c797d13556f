//! `SQLite` implementation of [`ReviewRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use spotbook_app::ports::ReviewRepository;
use spotbook_domain::error::{ConflictError, SpotbookError};
use spotbook_domain::id::{ReviewId, SpotId, UserId};
use spotbook_domain::review::{Review, ReviewContent, Stars};
use spotbook_domain::time::Timestamp;

use crate::decode::{decode_err, encode_timestamp, timestamp};
use crate::error::StorageError;

struct Wrapper(Review);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let stars: u8 = row.try_get("stars")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Review {
            id: ReviewId::new(row.try_get("id")?),
            user_id: UserId::new(row.try_get("user_id")?),
            spot_id: SpotId::new(row.try_get("spot_id")?),
            review: row.try_get("review")?,
            stars: Stars::try_from(stars).map_err(decode_err)?,
            created_at: timestamp(&created_at)?,
            updated_at: timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (spot_id, user_id, review, stars, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_SPOT: &str = "SELECT * FROM reviews WHERE spot_id = ? ORDER BY id";
const SELECT_BY_SPOT_AND_USER: &str = "SELECT * FROM reviews WHERE spot_id = ? AND user_id = ?";

/// `SQLite`-backed review repository.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    async fn create(
        &self,
        spot_id: SpotId,
        user_id: UserId,
        content: ReviewContent,
        created_at: Timestamp,
    ) -> Result<Review, SpotbookError> {
        let result = sqlx::query(INSERT)
            .bind(spot_id.get())
            .bind(user_id.get())
            .bind(&content.review)
            .bind(content.stars.get())
            .bind(encode_timestamp(created_at))
            .bind(encode_timestamp(created_at))
            .execute(&self.pool)
            .await
            .map_err(|err| match err {
                // (spot_id, user_id) is unique
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    SpotbookError::from(ConflictError::DuplicateReview)
                }
                other => StorageError::from(other).into(),
            })?;

        Ok(Review {
            id: ReviewId::new(result.last_insert_rowid()),
            user_id,
            spot_id,
            review: content.review,
            stars: content.stars,
            created_at,
            updated_at: created_at,
        })
    }

    async fn find_by_spot(&self, spot_id: SpotId) -> Result<Vec<Review>, SpotbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_SPOT)
            .bind(spot_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_spot_and_user(
        &self,
        spot_id: SpotId,
        user_id: UserId,
    ) -> Result<Option<Review>, SpotbookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_SPOT_AND_USER)
            .bind(spot_id.get())
            .bind(user_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }
}
