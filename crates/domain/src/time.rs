//! Timestamp helpers.

use chrono::{DateTime, SubsecRound, Utc};

/// UTC timestamp used for `createdAt` / `updatedAt`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time, truncated to milliseconds so values survive
/// a round-trip through the store unchanged.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}
