//! Clerk organization membership helpers.
//!
//! Calls the Clerk Backend API directly via `reqwest` and decodes the
//! `{ data, total_count }` list envelope into typed memberships. A payload
//! that fails to decode is an error, never an empty membership list.

use gate_core::{ListEnvelope, Organization, OrganizationMembership, decode_list_envelope};
use serde::Serialize;

use crate::AuthError;

/// Clerk's maximum page size for list endpoints.
pub const MAX_PAGE_LIMIT: u32 = 500;

/// Flattened view of one membership, for logs and CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipSummary {
    pub membership_id: String,
    pub organization_id: String,
    pub organization: String,
    pub slug: Option<String>,
    pub role: String,
    pub role_name: Option<String>,
    pub is_admin: bool,
}

impl From<&OrganizationMembership> for MembershipSummary {
    fn from(membership: &OrganizationMembership) -> Self {
        Self {
            membership_id: membership.id.clone(),
            organization_id: membership.organization.id.clone(),
            organization: membership.organization.name.clone(),
            slug: membership.organization.slug.clone(),
            role: membership.role.clone(),
            role_name: membership.role_name.clone(),
            is_admin: membership.is_admin(),
        }
    }
}

/// URL of a user's organization memberships, `limit` clamped to `1..=MAX_PAGE_LIMIT`.
#[must_use]
pub fn memberships_url(backend_url: &str, user_id: &str, limit: u32) -> String {
    format!(
        "{base}/users/{user}/organization_memberships?limit={limit}",
        base = backend_url.trim().trim_end_matches('/'),
        user = urlencoding::encode(user_id),
        limit = limit.clamp(1, MAX_PAGE_LIMIT),
    )
}

/// Decode an organization-membership list response body.
///
/// # Errors
///
/// Returns `AuthError::Decode` if the body is not valid JSON, is a bare array,
/// or contains a record that does not decode.
pub fn decode_memberships(raw: &str) -> Result<ListEnvelope<OrganizationMembership>, AuthError> {
    match decode_list_envelope::<OrganizationMembership>(raw) {
        Ok(envelope) => {
            tracing::debug!(
                records = envelope.len(),
                total_count = envelope.total_count,
                "decoded organization memberships"
            );
            Ok(envelope)
        }
        Err(error) => {
            tracing::warn!(%error, line = error.line(), column = error.column(), "organization membership payload rejected");
            Err(AuthError::Decode(error))
        }
    }
}

/// Organizations in which the membership grants admin rights, in response order.
pub fn admin_organizations(
    memberships: &ListEnvelope<OrganizationMembership>,
) -> impl Iterator<Item = &Organization> {
    memberships
        .iter()
        .filter(|m| m.is_admin())
        .map(|m| &m.organization)
}

/// Minimal Clerk Backend API client for membership listing.
///
/// The secret key is only sent as a bearer token; it is never logged.
#[derive(Clone)]
pub struct ClerkBackend {
    http: reqwest::Client,
    backend_url: String,
    secret_key: String,
}

impl std::fmt::Debug for ClerkBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClerkBackend")
            .field("backend_url", &self.backend_url)
            .finish_non_exhaustive()
    }
}

impl ClerkBackend {
    #[must_use]
    pub fn new(backend_url: &str, secret_key: &str) -> Self {
        Self::with_client(reqwest::Client::new(), backend_url, secret_key)
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, backend_url: &str, secret_key: &str) -> Self {
        Self {
            http,
            backend_url: backend_url.to_owned(),
            secret_key: secret_key.to_owned(),
        }
    }

    /// List a user's organization memberships.
    ///
    /// No retries: transient failures are reported to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ClerkApiError` if the request cannot be sent or the
    /// body cannot be read, `AuthError::ClerkApiStatus` on a non-2xx response,
    /// and `AuthError::Decode` if the body is not a membership list envelope.
    pub async fn list_user_memberships(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<ListEnvelope<OrganizationMembership>, AuthError> {
        let url = memberships_url(&self.backend_url, user_id, limit);
        let resp = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .send()
            .await
            .map_err(|e| AuthError::ClerkApiError(format!("list memberships: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "clerk membership listing failed");
            return Err(AuthError::ClerkApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::ClerkApiError(format!("read memberships body: {e}")))?;
        decode_memberships(&body)
    }
}
