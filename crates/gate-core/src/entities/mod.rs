//! Entity structs for Clerk organization payloads.
//!
//! Field names follow Clerk's Backend API wire format (`snake_case`). Optional
//! collections and flags are defaulted while decoding, including when the
//! provider sends an explicit `null`, so a decoded value never carries a
//! nullable-then-defaulted field.

mod membership;
mod organization;

pub use membership::OrganizationMembership;
pub use organization::Organization;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Free-form `public_metadata` / `private_metadata` object.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Treat an explicit JSON `null` the same as an absent field.
///
/// Pair with `#[serde(default)]` so absence takes the same path.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Clerk timestamps are epoch milliseconds.
pub(crate) fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
