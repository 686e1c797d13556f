//! # spotbook-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `spotbook-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `spotbook-app` (for port traits) and `spotbook-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod decode;
pub mod error;
pub mod pool;
pub mod review_image_repo;
pub mod review_repo;
pub mod spot_image_repo;
pub mod spot_repo;
pub mod user_repo;

#[cfg(test)]
mod testing;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use review_image_repo::SqliteReviewImageRepository;
pub use review_repo::SqliteReviewRepository;
pub use spot_image_repo::SqliteSpotImageRepository;
pub use spot_repo::SqliteSpotRepository;
pub use user_repo::SqliteUserRepository;
