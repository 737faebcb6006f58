//! Decode error types.
//!
//! Transport failures belong to `gate-auth`; configuration failures to
//! `gate-config`. Only payload decoding errors live here.

use serde_json::error::Category;
use thiserror::Error;

/// A provider payload could not be turned into typed records.
///
/// Callers must not treat this as "no records": a membership list that failed
/// to decode is not the same thing as a user without organizations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON (malformed, truncated, or unreadable).
    #[error("provider payload is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The payload is valid JSON but not a list envelope of decodable records.
    #[error("provider payload does not match the list envelope shape: {0}")]
    Shape(#[source] serde_json::Error),
}

impl DecodeError {
    /// Line of the payload where decoding stopped (1-based).
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner().line()
    }

    /// Column of the payload where decoding stopped (1-based).
    #[must_use]
    pub fn column(&self) -> usize {
        self.inner().column()
    }

    #[must_use]
    pub const fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    const fn inner(&self) -> &serde_json::Error {
        match self {
            Self::Syntax(error) | Self::Shape(error) => error,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Data => Self::Shape(error),
            Category::Io | Category::Syntax | Category::Eof => Self::Syntax(error),
        }
    }
}
