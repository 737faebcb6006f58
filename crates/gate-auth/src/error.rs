use gate_core::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid authorization request: {0}")]
    InvalidRequest(String),

    #[error("failed to generate state token: {0}")]
    StateGeneration(String),

    #[error("clerk API error: {0}")]
    ClerkApiError(String),

    #[error("clerk API returned HTTP {status}: {body}")]
    ClerkApiStatus { status: u16, body: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
