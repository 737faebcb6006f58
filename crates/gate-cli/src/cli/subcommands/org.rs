use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Organization membership commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// Decode a saved organization-membership list payload.
    Decode(OrgDecodeArgs),
    /// Fetch a user's organization memberships from the Clerk Backend API.
    List(OrgListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct OrgDecodeArgs {
    /// Payload file; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct OrgListArgs {
    /// Clerk user ID, e.g. `user_2abc`.
    #[arg(long)]
    pub user_id: String,
    /// Page size (clamped to 1..=500).
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}
