use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Metadata, millis_to_utc, null_as_default};

/// A Clerk organization, as embedded in membership records.
///
/// Only `id` is required. Everything else tolerates `null` or absence, so one
/// sparse record cannot fail a whole list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Organization {
    /// Wire object tag, `"organization"`.
    pub object: Option<String>,
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub name: String,

    /// `None` when the instance has organization slugs disabled.
    pub slug: Option<String>,
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "bool")]
    pub has_image: bool,

    /// Clerk user ID of the creator.
    pub created_by: Option<String>,

    /// Epoch milliseconds.
    pub created_at: Option<i64>,
    /// Epoch milliseconds.
    pub updated_at: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Metadata")]
    pub public_metadata: Metadata,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Metadata")]
    pub private_metadata: Metadata,

    /// Membership limit. `None` when the provider does not report one.
    pub max_allowed_memberships: Option<i32>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "bool")]
    pub admin_delete_enabled: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "i32")]
    pub members_count: i32,
}

impl Organization {
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(millis_to_utc)
    }

    #[must_use]
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.and_then(millis_to_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_optional_fields_take_defaults() {
        let org: Organization = serde_json::from_str(
            r#"{
                "id": "org_123",
                "name": "Test Org",
                "slug": "test-org",
                "created_at": 1754190273000,
                "updated_at": 1754190273000
            }"#,
        )
        .expect("minimal organization should decode");

        assert!(!org.has_image);
        assert!(!org.admin_delete_enabled);
        assert_eq!(org.members_count, 0);
        assert!(org.public_metadata.is_empty());
        assert!(org.private_metadata.is_empty());
        assert_eq!(org.image_url, None);
        assert_eq!(org.max_allowed_memberships, None);
    }

    #[test]
    fn explicit_nulls_take_defaults() {
        let org: Organization = serde_json::from_str(
            r#"{
                "id": "org_123",
                "name": "Test Org",
                "slug": "test-org",
                "created_at": 0,
                "updated_at": 0,
                "has_image": null,
                "admin_delete_enabled": null,
                "members_count": null,
                "public_metadata": null,
                "private_metadata": null
            }"#,
        )
        .expect("nulls should be defaulted");

        assert!(!org.has_image);
        assert!(!org.admin_delete_enabled);
        assert_eq!(org.members_count, 0);
        assert!(org.public_metadata.is_empty());
    }

    #[test]
    fn missing_id_is_rejected() {
        let result = serde_json::from_str::<Organization>(
            r#"{ "name": "Test Org", "slug": "test-org", "created_at": 0, "updated_at": 0 }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn null_slug_and_sparse_fields_still_decode() {
        let org: Organization = serde_json::from_str(
            r#"{
                "id": "org_123",
                "name": null,
                "slug": null,
                "created_by": null,
                "created_at": null,
                "members_count": -1
            }"#,
        )
        .expect("sparse organization should decode");

        assert_eq!(org.slug, None);
        assert_eq!(org.name, "");
        assert_eq!(org.created_by, None);
        assert_eq!(org.created_at, None);
        assert_eq!(org.updated_at, None);
        assert_eq!(org.created_at_utc(), None);
        assert_eq!(org.members_count, -1);
    }

    #[test]
    fn timestamps_convert_from_millis() {
        let org: Organization = serde_json::from_str(
            r#"{ "id": "o", "name": "n", "slug": "s", "created_at": 1754190273000, "updated_at": 1754190273500 }"#,
        )
        .expect("decode");

        let created = org.created_at_utc().expect("in range");
        assert_eq!(created.to_rfc3339(), "2025-08-03T03:04:33+00:00");
        let updated = org.updated_at_utc().expect("in range");
        assert_eq!(updated.timestamp_subsec_millis(), 500);
    }
}
