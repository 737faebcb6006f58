//! # gate-auth
//!
//! Clerk integration for Gatehouse.
//!
//! Provides OAuth authorization URL construction with a normalized frontend
//! endpoint, random state tokens (`getrandom`), and decoding of Clerk's
//! organization-membership list responses, plus a thin `reqwest` client for
//! the membership endpoint. URL building and decoding perform no I/O.

pub mod authorize;
pub mod error;
pub mod org;

pub use authorize::{
    AuthorizationRequest, FrontendEndpoint, build_authorization_url, generate_state,
};
pub use error::AuthError;
pub use org::{ClerkBackend, MembershipSummary, admin_organizations, decode_memberships};
