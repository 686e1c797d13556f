//! `SQLite` implementation of [`SpotRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use spotbook_app::ports::SpotRepository;
use spotbook_domain::error::SpotbookError;
use spotbook_domain::id::{SpotId, UserId};
use spotbook_domain::spot::{Spot, SpotDetails};
use spotbook_domain::time::Timestamp;

use crate::decode::{encode_timestamp, timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Spot);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Spot> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Spot {
            id: SpotId::new(row.try_get("id")?),
            owner_id: UserId::new(row.try_get("owner_id")?),
            details: SpotDetails {
                address: row.try_get("address")?,
                city: row.try_get("city")?,
                state: row.try_get("state")?,
                country: row.try_get("country")?,
                lat: row.try_get("lat")?,
                lng: row.try_get("lng")?,
                name: row.try_get("name")?,
                description: row.try_get("description")?,
                price: row.try_get("price")?,
            },
            created_at: timestamp(&created_at)?,
            updated_at: timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO spots (owner_id, address, city, state, country, lat, lng, name, description, price, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM spots WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM spots ORDER BY id";
const SELECT_BY_OWNER: &str = "SELECT * FROM spots WHERE owner_id = ? ORDER BY id";

const UPDATE: &str = r"
    UPDATE spots
    SET address = ?, city = ?, state = ?, country = ?, lat = ?, lng = ?,
        name = ?, description = ?, price = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM spots WHERE id = ?";

/// `SQLite`-backed spot repository.
pub struct SqliteSpotRepository {
    pool: SqlitePool,
}

impl SqliteSpotRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SpotRepository for SqliteSpotRepository {
    async fn create(
        &self,
        owner_id: UserId,
        details: SpotDetails,
        created_at: Timestamp,
    ) -> Result<Spot, SpotbookError> {
        let result = sqlx::query(INSERT)
            .bind(owner_id.get())
            .bind(&details.address)
            .bind(&details.city)
            .bind(&details.state)
            .bind(&details.country)
            .bind(details.lat)
            .bind(details.lng)
            .bind(&details.name)
            .bind(&details.description)
            .bind(details.price)
            .bind(encode_timestamp(created_at))
            .bind(encode_timestamp(created_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Spot {
            id: SpotId::new(result.last_insert_rowid()),
            owner_id,
            details,
            created_at,
            updated_at: created_at,
        })
    }

    async fn get_by_id(&self, id: SpotId) -> Result<Option<Spot>, SpotbookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Spot>, SpotbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Spot>, SpotbookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_OWNER)
            .bind(owner_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, spot: Spot) -> Result<Spot, SpotbookError> {
        let details = &spot.details;
        sqlx::query(UPDATE)
            .bind(&details.address)
            .bind(&details.city)
            .bind(&details.state)
            .bind(&details.country)
            .bind(details.lat)
            .bind(details.lng)
            .bind(&details.name)
            .bind(&details.description)
            .bind(details.price)
            .bind(encode_timestamp(spot.updated_at))
            .bind(spot.id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(spot)
    }

    async fn delete(&self, id: SpotId) -> Result<(), SpotbookError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
