//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod review_service;
pub mod spot_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod in_memory;

use spotbook_domain::error::{NotFoundError, SpotbookError};
use spotbook_domain::id::SpotId;

fn spot_not_found(id: SpotId) -> SpotbookError {
    NotFoundError {
        entity: "Spot",
        id: id.to_string(),
    }
    .into()
}
