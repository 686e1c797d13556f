//! `SQLite` implementation of [`SpotImageRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use spotbook_app::ports::SpotImageRepository;
use spotbook_domain::error::SpotbookError;
use spotbook_domain::id::{SpotId, SpotImageId};
use spotbook_domain::spot_image::{NewSpotImage, SpotImage};

use crate::error::StorageError;

struct Wrapper(SpotImage);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(SpotImage {
            id: SpotImageId::new(row.try_get("id")?),
            spot_id: SpotId::new(row.try_get("spot_id")?),
            url: row.try_get("url")?,
            preview: row.try_get("preview")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO spot_images (spot_id, url, preview) VALUES (?, ?, ?)";
const SELECT_BY_SPOT: &str = "SELECT * FROM spot_images WHERE spot_id = ? ORDER BY id";

/// `SQLite`-backed spot image repository.
pub struct SqliteSpotImageRepository {
    pool: SqlitePool,
}

impl SqliteSpotImageRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SpotImageRepository for SqliteSpotImageRepository {
    async fn create(&self, spot_id: SpotId, image: NewSpotImage) -> Result<SpotImage, SpotbookError> {
        let result = sqlx::query(INSERT)
            .bind(spot_id.get())
            .bind(&image.url)
            .bind(image.preview)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(SpotImage {
            id: SpotImageId::new(result.last_insert_rowid()),
            spot_id,
            url: image.url,
            preview: image.preview,
        })
    }

    async fn find_by_spot(&self, spot_id: SpotId) -> Result<Vec<SpotImage>, SpotbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_SPOT)
            .bind(spot_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
