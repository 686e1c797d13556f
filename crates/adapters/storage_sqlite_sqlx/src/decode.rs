//! Column decoding helpers shared by the row wrappers.

use spotbook_domain::time::Timestamp;

/// Wrap any decoding failure as [`sqlx::Error::Decode`].
pub(crate) fn decode_err<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

/// Parse an RFC 3339 column into a UTC timestamp.
pub(crate) fn timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(decode_err)
}

/// Format a timestamp the way [`timestamp`] reads it back.
pub(crate) fn encode_timestamp(value: Timestamp) -> String {
    value.to_rfc3339()
}
