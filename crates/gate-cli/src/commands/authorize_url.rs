use anyhow::anyhow;
use gate_auth::{AuthorizationRequest, FrontendEndpoint};
use gate_config::GatehouseConfig;
use serde::Serialize;

use crate::cli::{AuthorizeUrlArgs, GlobalFlags};
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthorizeUrlResponse {
    url: String,
    state: String,
    provider: String,
}

/// Handle `gate authorize-url`.
pub fn handle(
    args: &AuthorizeUrlArgs,
    config: &GatehouseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&build(args, config)?, flags.format)
}

fn build(args: &AuthorizeUrlArgs, config: &GatehouseConfig) -> anyhow::Result<AuthorizeUrlResponse> {
    let frontend = config.clerk.require_frontend_api()?;
    let provider = args
        .provider
        .as_deref()
        .unwrap_or(config.oauth.default_provider.as_str());
    let redirect_uri = args
        .redirect_uri
        .as_deref()
        .or_else(|| config.oauth.redirect_uri())
        .ok_or_else(|| {
            anyhow!("no redirect URI: pass --redirect-uri or set GATEHOUSE_OAUTH__REDIRECT_URI")
        })?;

    let request = match args.state.as_deref() {
        Some(state) => AuthorizationRequest::new(provider, redirect_uri, state)?,
        None => AuthorizationRequest::with_random_state(
            provider,
            redirect_uri,
            config.oauth.state_bytes,
        )?,
    };

    Ok(AuthorizeUrlResponse {
        url: request.authorize_url(&FrontendEndpoint::new(frontend)),
        state: request.state().to_owned(),
        provider: request.provider().to_owned(),
    })
}
