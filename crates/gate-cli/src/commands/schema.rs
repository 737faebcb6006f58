use gate_core::{ListEnvelope, Organization, OrganizationMembership};
use schemars::schema_for;

use crate::cli::{GlobalFlags, SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `gate schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.type_name), flags.format)
}

fn schema(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::MembershipList => schema_for!(ListEnvelope<OrganizationMembership>),
        SchemaType::Membership => schema_for!(OrganizationMembership),
        SchemaType::Organization => schema_for!(Organization),
    }
}
