pub mod authorize_url;
pub mod org;
pub mod schema;

use gate_config::GatehouseConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command that needs configuration to its handler.
pub async fn dispatch(
    command: Commands,
    config: &GatehouseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::AuthorizeUrl(args) => authorize_url::handle(&args, config, flags),
        Commands::Org { action } => org::handle(&action, config, flags).await,
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
