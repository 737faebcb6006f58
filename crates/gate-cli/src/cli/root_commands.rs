use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::OrgCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print a Clerk OAuth authorization URL and its state token.
    AuthorizeUrl(AuthorizeUrlArgs),
    /// Organization membership inspection.
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Print the JSON Schema of a decoded Clerk payload.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthorizeUrlArgs {
    /// OAuth provider, e.g. `google` (defaults to `oauth.default_provider`).
    #[arg(long)]
    pub provider: Option<String>,
    /// Callback URL Clerk redirects to (defaults to `oauth.redirect_uri`).
    #[arg(long)]
    pub redirect_uri: Option<String>,
    /// Anti-forgery state; a random token is generated when omitted.
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Payload type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    /// `{ data: [OrganizationMembership], total_count }`
    MembershipList,
    Membership,
    Organization,
}
