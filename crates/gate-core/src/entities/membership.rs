use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Metadata, Organization, millis_to_utc, null_as_default};
use crate::roles::{ADMIN_ROLE, SYS_PROFILE_MANAGE};

/// A user's membership in one Clerk organization.
///
/// Returned by `GET /v1/users/{user_id}/organization_memberships`. The
/// membership owns its embedded [`Organization`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OrganizationMembership {
    /// Wire object tag, `"organization_membership"`.
    pub object: Option<String>,
    pub id: String,

    /// Role slug, e.g. `"org:admin"`. Empty if the provider omitted it.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub role: String,
    /// Human-readable role name, e.g. `"Admin"`.
    pub role_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<String>")]
    pub permissions: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Metadata")]
    pub public_metadata: Metadata,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Metadata")]
    pub private_metadata: Metadata,

    /// Epoch milliseconds.
    pub created_at: Option<i64>,
    /// Epoch milliseconds.
    pub updated_at: Option<i64>,

    pub organization: Organization,
}

impl OrganizationMembership {
    /// Exact-match permission lookup. No wildcard or hierarchy matching.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Admin if the role is `org:admin` OR the profile-management permission
    /// is granted. The two signals are independent; either one suffices.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE || self.has_permission(SYS_PROFILE_MANAGE)
    }

    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(millis_to_utc)
    }

    #[must_use]
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.and_then(millis_to_utc)
    }
}
