pub mod decode;
mod list;

use gate_auth::MembershipSummary;
use gate_config::GatehouseConfig;
use gate_core::{ListEnvelope, OrganizationMembership};
use serde::Serialize;

use crate::cli::{GlobalFlags, OrgCommands};

/// Output shared by `org decode` and `org list`.
#[derive(Debug, Serialize)]
pub struct MembershipsResponse {
    pub total_count: u64,
    pub memberships: Vec<MembershipSummary>,
}

impl From<&ListEnvelope<OrganizationMembership>> for MembershipsResponse {
    fn from(envelope: &ListEnvelope<OrganizationMembership>) -> Self {
        Self {
            total_count: envelope.total_count,
            memberships: envelope.iter().map(MembershipSummary::from).collect(),
        }
    }
}

/// Handle `gate org <subcommand>`.
pub async fn handle(
    action: &OrgCommands,
    config: &GatehouseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrgCommands::Decode(args) => decode::handle(args, flags),
        OrgCommands::List(args) => list::handle(args, config, flags).await,
    }
}
