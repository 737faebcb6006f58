//! Clerk organization role and system permission keys.

/// Role slug Clerk assigns to organization administrators.
pub const ADMIN_ROLE: &str = "org:admin";

/// System permission that also grants admin rights.
pub const SYS_PROFILE_MANAGE: &str = "org:sys_profile:manage";
