//! Clerk list-response envelope.
//!
//! Every Clerk Backend API list endpoint answers with
//!
//! ```json
//! { "data": [ ... ], "total_count": 42 }
//! ```
//!
//! `ListEnvelope<T>` is the only accepted shape. Its `Deserialize` impl only
//! visits maps, so a bare top-level array (`[...]`, including `[]`) is rejected
//! no matter which entry point drives decoding (`serde_json::from_str`,
//! `serde_json::from_value`, `reqwest::Response::json`, ...).

use std::fmt;
use std::marker::PhantomData;

use schemars::JsonSchema;
use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::DecodeError;

/// Ordered page of records plus the provider's total count.
///
/// `data` is never absent: a missing or `null` wire field decodes to an empty
/// vector, and a missing or `null` `total_count` decodes to zero.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub total_count: u64,
}

impl<T> ListEnvelope<T> {
    #[must_use]
    pub const fn new(data: Vec<T>, total_count: u64) -> Self {
        Self { data, total_count }
    }

    /// Number of records in this page (not the provider's total).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

impl<T> IntoIterator for ListEnvelope<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListEnvelope<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum EnvelopeField {
    Data,
    TotalCount,
    #[serde(other)]
    Other,
}

struct EnvelopeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for EnvelopeVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = ListEnvelope<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a list envelope object `{ \"data\": [...], \"total_count\": N }`")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut data: Option<Vec<T>> = None;
        let mut total_count: Option<u64> = None;

        while let Some(field) = map.next_key::<EnvelopeField>()? {
            match field {
                EnvelopeField::Data => {
                    if data.is_some() {
                        return Err(de::Error::duplicate_field("data"));
                    }
                    data = Some(map.next_value::<Option<Vec<T>>>()?.unwrap_or_default());
                }
                EnvelopeField::TotalCount => {
                    if total_count.is_some() {
                        return Err(de::Error::duplicate_field("total_count"));
                    }
                    total_count = Some(map.next_value::<Option<u64>>()?.unwrap_or_default());
                }
                EnvelopeField::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(ListEnvelope {
            data: data.unwrap_or_default(),
            total_count: total_count.unwrap_or_default(),
        })
    }
}

impl<'de, T> Deserialize<'de> for ListEnvelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EnvelopeVisitor(PhantomData))
    }
}

/// Decode a Clerk list response body.
///
/// # Errors
///
/// Returns [`DecodeError::Syntax`] if `raw` is not valid JSON and
/// [`DecodeError::Shape`] if it is not an envelope object or a record in
/// `data` does not decode as `T`.
pub fn decode_list_envelope<T: DeserializeOwned>(raw: &str) -> Result<ListEnvelope<T>, DecodeError> {
    serde_json::from_str(raw).map_err(DecodeError::from)
}
