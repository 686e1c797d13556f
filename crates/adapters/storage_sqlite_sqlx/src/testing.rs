//! Fixtures shared by the repository tests.

use sqlx::SqlitePool;

use spotbook_app::ports::{SpotRepository, UserRepository};
use spotbook_domain::id::{SpotId, UserId};
use spotbook_domain::spot::SpotDetails;
use spotbook_domain::time;
use spotbook_domain::user::NewUser;

use crate::pool::Config;
use crate::spot_repo::SqliteSpotRepository;
use crate::user_repo::SqliteUserRepository;

pub(crate) async fn memory_db() -> SqlitePool {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .unwrap();
    db.pool().clone()
}

pub(crate) async fn insert_user(pool: &SqlitePool, username: &str) -> UserId {
    SqliteUserRepository::new(pool.clone())
        .create(NewUser {
            username: username.to_string(),
            email: format!("{username}@spotbook.io"),
            first_name: "Test".to_string(),
            last_name: username.to_string(),
        })
        .await
        .unwrap()
        .id
}

pub(crate) fn sample_details() -> SpotDetails {
    SpotDetails {
        address: "123 Disney Lane".to_string(),
        city: "San Francisco".to_string(),
        state: "California".to_string(),
        country: "United States of America".to_string(),
        lat: 37.764_358_5,
        lng: -122.473_043_1,
        name: "App Academy".to_string(),
        description: "Place where web developers are created".to_string(),
        price: 123.0,
    }
}

pub(crate) async fn insert_spot(pool: &SqlitePool, owner: UserId) -> SpotId {
    SqliteSpotRepository::new(pool.clone())
        .create(owner, sample_details(), time::now())
        .await
        .unwrap()
        .id
}
