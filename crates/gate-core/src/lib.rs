//! # gate-core
//!
//! Core types and error types for Gatehouse.
//!
//! This crate provides the foundational types shared across all Gatehouse crates:
//! - Entity structs for Clerk organizations and organization memberships
//! - The generic `{ data, total_count }` list envelope returned by Clerk list endpoints
//! - Role and permission constants
//! - Decode error types
//!
//! Nothing here performs I/O. Decoding is pure and deterministic.

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod roles;

pub use entities::{Metadata, Organization, OrganizationMembership};
pub use envelope::{ListEnvelope, decode_list_envelope};
pub use errors::DecodeError;
