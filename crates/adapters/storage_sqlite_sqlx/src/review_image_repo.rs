//! `SQLite` implementation of [`ReviewImageRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use spotbook_app::ports::ReviewImageRepository;
use spotbook_domain::error::SpotbookError;
use spotbook_domain::id::{ReviewId, ReviewImageId};
use spotbook_domain::review::ReviewImage;

use crate::error::StorageError;

struct Wrapper(ReviewImage);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(ReviewImage {
            id: ReviewImageId::new(row.try_get("id")?),
            review_id: ReviewId::new(row.try_get("review_id")?),
            url: row.try_get("url")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO review_images (review_id, url) VALUES (?, ?)";
const SELECT_BY_REVIEW: &str = "SELECT * FROM review_images WHERE review_id = ? ORDER BY id";

/// `SQLite`-backed review image repository.
pub struct SqliteReviewImageRepository {
    pool: SqlitePool,
}

impl SqliteReviewImageRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewImageRepository for SqliteReviewImageRepository {
    async fn create(&self, review_id: ReviewId, url: String) -> Result<ReviewImage, SpotbookError> {
        let result = sqlx::query(INSERT)
            .bind(review_id.get())
            .bind(&url)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(ReviewImage {
            id: ReviewImageId::new(result.last_insert_rowid()),
            review_id,
            url,
        })
    }

    async fn find_by_review(&self, review_id: ReviewId) -> Result<Vec<ReviewImage>, SpotbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_REVIEW)
            .bind(review_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
