use gate_auth::ClerkBackend;
use gate_config::GatehouseConfig;

use super::MembershipsResponse;
use crate::cli::{GlobalFlags, OrgListArgs};
use crate::output::output;

/// Handle `gate org list`.
pub async fn handle(
    args: &OrgListArgs,
    config: &GatehouseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let envelope = backend(config)?
        .list_user_memberships(&args.user_id, args.limit)
        .await?;
    tracing::debug!(
        user_id = %args.user_id,
        admin_orgs = gate_auth::admin_organizations(&envelope).count(),
        "listed organization memberships"
    );

    output(&MembershipsResponse::from(&envelope), flags.format)
}

fn backend(config: &GatehouseConfig) -> anyhow::Result<ClerkBackend> {
    let secret_key = config.clerk.require_secret_key()?;
    Ok(ClerkBackend::new(config.clerk.backend_url(), secret_key))
}
