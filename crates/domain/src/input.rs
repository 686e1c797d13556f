//! Lenient deserializers for incoming drafts.
//!
//! Clients often send numbers as strings (`"lat": "37.5"`). Such values are
//! accepted here so that a bad value is reported by field validation instead
//! of failing the whole body.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Read an optional number from a JSON number or a numeric string.
///
/// Anything else (non-numeric text, booleans, arrays, `null`) becomes `None`
/// and is left to validation.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(number)) => Some(number),
        Some(NumberOrText::Text(text)) => {
            text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
        }
        Some(NumberOrText::Other(_)) | None => None,
    })
}
